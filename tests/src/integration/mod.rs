//! # Integration Tests
//!
//! Flows that span the host shell, the ordering core and a real store.

pub mod flows;
