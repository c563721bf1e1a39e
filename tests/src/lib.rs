//! # Taxonomy Sort Test Suite
//!
//! Cross-crate tests driving the host shell end to end.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Reorder and submission throughput
//! └── src/integration/  # Shell + core + store flows
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p ts-tests
//! cargo bench -p ts-tests
//! ```

#![allow(dead_code)]

pub mod integration;
