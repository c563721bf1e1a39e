//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implementations of the `OrderStore` outbound port.

mod file_store;
mod memory_store;

pub use file_store::FileOrderStore;
pub use memory_store::InMemoryOrderStore;
