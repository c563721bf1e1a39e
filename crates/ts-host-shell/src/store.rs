//! Store selection for the shell process.

use crate::config::{ShellConfig, StoreBackend};
use ts_term_ordering::{FileOrderStore, InMemoryOrderStore, OrderStore, StoreError, TermId};

/// Order store chosen at startup from `StoreBackend`.
pub enum ShellStore {
    Memory(InMemoryOrderStore),
    File(FileOrderStore),
}

impl ShellStore {
    pub fn open(config: &ShellConfig) -> Result<Self, StoreError> {
        match &config.store {
            StoreBackend::Memory => Ok(ShellStore::Memory(InMemoryOrderStore::new())),
            StoreBackend::File { path } => Ok(ShellStore::File(FileOrderStore::open(
                path,
                config.sort.meta_key.clone(),
            )?)),
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            ShellStore::Memory(_) => "memory",
            ShellStore::File(_) => "file",
        }
    }
}

impl OrderStore for ShellStore {
    fn get_rank(&self, term_id: TermId) -> Result<Option<i64>, StoreError> {
        match self {
            ShellStore::Memory(store) => store.get_rank(term_id),
            ShellStore::File(store) => store.get_rank(term_id),
        }
    }

    fn set_rank(&self, term_id: TermId, rank: i64) -> Result<(), StoreError> {
        match self {
            ShellStore::Memory(store) => store.set_rank(term_id, rank),
            ShellStore::File(store) => store.set_rank(term_id, rank),
        }
    }

    fn set_ranks(&self, ranks: &[(TermId, i64)]) -> Result<(), StoreError> {
        match self {
            ShellStore::Memory(store) => store.set_ranks(ranks),
            ShellStore::File(store) => store.set_ranks(ranks),
        }
    }

    fn delete_all_ranks(&self) -> Result<usize, StoreError> {
        match self {
            ShellStore::Memory(store) => store.delete_all_ranks(),
            ShellStore::File(store) => store.delete_all_ranks(),
        }
    }
}
