//! Outbound Ports (Driven Ports / SPI)
//!
//! The order store is owned by the host's metadata subsystem. This crate
//! consumes it; adapters for tests and standalone use live in `adapters`.

use crate::domain::errors::StoreError;
use crate::domain::value_objects::TermId;
use std::sync::Arc;

/// Per-term rank persistence.
///
/// Values are raw integers as the host stores them. Zero or negative values
/// are legal to store and read back; the reorder engine treats them as
/// "unranked".
pub trait OrderStore: Send + Sync {
    /// Stored value for a term, `None` when nothing is set.
    fn get_rank(&self, term_id: TermId) -> Result<Option<i64>, StoreError>;

    /// Upsert a term's value, overwriting any prior one.
    fn set_rank(&self, term_id: TermId, rank: i64) -> Result<(), StoreError>;

    /// Upsert many values in order. A term listed twice keeps its last value.
    ///
    /// Stores with a costly commit should override this to commit once.
    fn set_ranks(&self, ranks: &[(TermId, i64)]) -> Result<(), StoreError> {
        for (term_id, rank) in ranks {
            self.set_rank(*term_id, *rank)?;
        }
        Ok(())
    }

    /// Remove every stored value. Returns how many entries were removed.
    fn delete_all_ranks(&self) -> Result<usize, StoreError>;
}

impl<S: OrderStore + ?Sized> OrderStore for Arc<S> {
    fn get_rank(&self, term_id: TermId) -> Result<Option<i64>, StoreError> {
        (**self).get_rank(term_id)
    }

    fn set_rank(&self, term_id: TermId, rank: i64) -> Result<(), StoreError> {
        (**self).set_rank(term_id, rank)
    }

    fn set_ranks(&self, ranks: &[(TermId, i64)]) -> Result<(), StoreError> {
        (**self).set_ranks(ranks)
    }

    fn delete_all_ranks(&self) -> Result<usize, StoreError> {
        (**self).delete_all_ranks()
    }
}
