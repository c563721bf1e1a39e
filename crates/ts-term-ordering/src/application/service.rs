//! Term Ordering Service
//!
//! Main service implementing TermOrderingApi over an injected OrderStore.

use crate::algorithms::{plan_rank_writes, reorder_records};
use crate::config::SortConfig;
use crate::domain::entities::TermRecord;
use crate::domain::errors::OrderingError;
use crate::domain::value_objects::{AssignmentSummary, Rank, RankWrite, TermId};
use crate::ports::inbound::TermOrderingApi;
use crate::ports::outbound::OrderStore;
use std::sync::Arc;

use tracing::{debug, info, warn};

/// Term Ordering Service
///
/// Reorders listings and writes administrator-submitted orders through the
/// store it is constructed with.
pub struct TermOrderingService<S: OrderStore> {
    store: Arc<S>,
    config: SortConfig,
}

impl<S: OrderStore> TermOrderingService<S> {
    /// Create a new service with default config
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            config: SortConfig::default(),
        }
    }

    /// Create a new service with custom config
    pub fn with_config(store: Arc<S>, config: SortConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    fn validate_submission(&self, rows: usize) -> Result<(), OrderingError> {
        if rows > self.config.max_submission_rows {
            return Err(OrderingError::SubmissionTooLarge {
                rows,
                max: self.config.max_submission_rows,
            });
        }
        Ok(())
    }

    fn apply_writes(
        &self,
        writes: Vec<RankWrite>,
        skipped: usize,
    ) -> Result<AssignmentSummary, OrderingError> {
        let batch: Vec<(TermId, i64)> = writes
            .iter()
            .map(|write| (write.term_id, write.rank.to_stored()))
            .collect();
        self.store.set_ranks(&batch)?;
        debug!(count = batch.len(), "Rank batch written");

        let summary = AssignmentSummary {
            written: writes.len(),
            skipped,
        };
        info!(
            written = summary.written,
            skipped = summary.skipped,
            "Term order assigned"
        );
        Ok(summary)
    }
}

impl<S: OrderStore> TermOrderingApi for TermOrderingService<S> {
    fn reorder<T: TermRecord>(&self, records: Vec<T>) -> Result<Vec<T>, OrderingError> {
        let total = records.len();
        let outcome = reorder_records(records, &self.config, |term_id| {
            Ok::<_, OrderingError>(self.store.get_rank(term_id)?.and_then(Rank::from_stored))
        })?;

        if outcome.dropped > 0 {
            warn!(
                dropped = outcome.dropped,
                "Records sharing a rank were dropped (last-wins tie break)"
            );
        }
        debug!(total, ranked = outcome.ranked, "Terms reordered");

        Ok(outcome.records)
    }

    fn assign_ranks(&self, order: &[Option<TermId>]) -> Result<AssignmentSummary, OrderingError> {
        self.validate_submission(order.len())?;

        let rows = order.iter().enumerate().map(|(i, id)| {
            // Bounded by max_submission_rows
            (u32::try_from(i).unwrap_or(u32::MAX), *id)
        });
        let (writes, skipped) = plan_rank_writes(rows);
        self.apply_writes(writes, skipped)
    }

    fn assign_positions(
        &self,
        rows: &[(u32, Option<TermId>)],
    ) -> Result<AssignmentSummary, OrderingError> {
        self.validate_submission(rows.len())?;

        let (writes, skipped) = plan_rank_writes(rows.iter().copied());
        self.apply_writes(writes, skipped)
    }

    fn purge_ranks(&self) -> Result<usize, OrderingError> {
        let removed = self.store.delete_all_ranks()?;
        info!(removed, meta_key = %self.config.meta_key, "Stored ranks purged");
        Ok(removed)
    }
}
