use crate::domain::errors::StoreError;
use crate::domain::value_objects::TermId;
use crate::ports::outbound::OrderStore;
use parking_lot::RwLock;
use std::collections::HashMap;

/// In-memory order store.
///
/// Backs unit tests and the shell's default configuration. Per-key upserts
/// are atomic under the lock; concurrent writers are last-write-wins.
#[derive(Default)]
pub struct InMemoryOrderStore {
    ranks: RwLock<HashMap<TermId, i64>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with raw values.
    pub fn with_ranks<I>(ranks: I) -> Self
    where
        I: IntoIterator<Item = (TermId, i64)>,
    {
        Self {
            ranks: RwLock::new(ranks.into_iter().collect()),
        }
    }

    pub fn len(&self) -> usize {
        self.ranks.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.read().is_empty()
    }
}

impl OrderStore for InMemoryOrderStore {
    fn get_rank(&self, term_id: TermId) -> Result<Option<i64>, StoreError> {
        Ok(self.ranks.read().get(&term_id).copied())
    }

    fn set_rank(&self, term_id: TermId, rank: i64) -> Result<(), StoreError> {
        self.ranks.write().insert(term_id, rank);
        Ok(())
    }

    fn set_ranks(&self, ranks: &[(TermId, i64)]) -> Result<(), StoreError> {
        self.ranks.write().extend(ranks.iter().copied());
        Ok(())
    }

    fn delete_all_ranks(&self) -> Result<usize, StoreError> {
        let mut ranks = self.ranks.write();
        let removed = ranks.len();
        ranks.clear();
        Ok(removed)
    }
}
