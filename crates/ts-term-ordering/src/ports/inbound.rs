//! Inbound Ports (Driving Ports / API)

use crate::domain::entities::TermRecord;
use crate::domain::errors::OrderingError;
use crate::domain::value_objects::{AssignmentSummary, TermId};

/// Primary Term Ordering API
pub trait TermOrderingApi: Send + Sync {
    /// Return the records in display order.
    ///
    /// Ranked records come first by ascending rank; unranked and id-less
    /// records trail in their input order. Read-only against the store.
    fn reorder<T: TermRecord>(&self, records: Vec<T>) -> Result<Vec<T>, OrderingError>;

    /// Rank each present id by its slice index + 1. `None` entries are
    /// skipped but keep their position.
    fn assign_ranks(&self, order: &[Option<TermId>]) -> Result<AssignmentSummary, OrderingError>;

    /// Rank each present id by its explicit position + 1.
    ///
    /// Rows are written in order. Positions may repeat; a term listed more
    /// than once keeps its last rank.
    fn assign_positions(
        &self,
        rows: &[(u32, Option<TermId>)],
    ) -> Result<AssignmentSummary, OrderingError>;

    /// Remove every stored rank. Returns the number removed.
    fn purge_ranks(&self) -> Result<usize, OrderingError>;
}
