//! IPC Module for Term Ordering
//!
//! ## Security Boundaries
//!
//! - Accept: listings from any context
//! - Accept: order submissions from authenticated callers only
//! - Accept: teardown from callers holding `ActivatePlugins` only

pub mod handler;
pub mod payloads;

pub use handler::TermOrderingHandler;
pub use payloads::*;
