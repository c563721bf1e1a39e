//! Ports module for Term Ordering
//!
//! Defines inbound (API) and outbound (SPI) port traits.

pub mod inbound;
pub mod outbound;

pub use inbound::TermOrderingApi;
pub use outbound::OrderStore;
