//! IPC Handler for Term Ordering
//!
//! ## Security Boundaries
//!
//! - Order submission MUST come from an authenticated caller
//! - Teardown MUST come from a caller holding `ActivatePlugins`; otherwise it
//!   is a silent no-op
//! - Listings are never rejected; a failing store leaves them unordered

use crate::algorithms::{parse_row, RowEntry};
use crate::application::service::TermOrderingService;
use crate::config::SortConfig;
use crate::domain::entities::TermRecord;
use crate::domain::errors::OrderingError;
use crate::domain::value_objects::TermId;
use crate::ipc::payloads::{
    Capability, ListingContext, Principal, SubmissionMetrics, SubmitOrderRequest,
    SubmitOrderResponse, TeardownOutcome,
};
use crate::ports::inbound::TermOrderingApi;
use crate::ports::outbound::OrderStore;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// IPC Handler for Term Ordering.
///
/// Validates callers and delegates to the domain service.
pub struct TermOrderingHandler<S: OrderStore> {
    service: TermOrderingService<S>,
}

impl<S: OrderStore> TermOrderingHandler<S> {
    /// Create a new handler with default config.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            service: TermOrderingService::new(store),
        }
    }

    /// Create a new handler with custom config.
    pub fn with_config(store: Arc<S>, config: SortConfig) -> Self {
        Self {
            service: TermOrderingService::with_config(store, config),
        }
    }

    pub fn service(&self) -> &TermOrderingService<S> {
        &self.service
    }

    /// Rewrite a retrieved term listing into display order.
    ///
    /// Applies in admin and public contexts alike. If the store fails, the
    /// listing is returned as retrieved.
    pub fn handle_terms_retrieved<T>(&self, context: ListingContext, terms: Vec<T>) -> Vec<T>
    where
        T: TermRecord + Clone,
    {
        if terms.is_empty() {
            return terms;
        }

        let fallback = terms.clone();
        match self.service.reorder(terms) {
            Ok(ordered) => {
                debug!(
                    "[ts-core] Reordered {} terms ({:?} listing)",
                    ordered.len(),
                    context
                );
                ordered
            }
            Err(e) => {
                error!("[ts-core] ❌ Reorder failed, listing left as retrieved: {}", e);
                fallback
            }
        }
    }

    /// Handle an order submission from the admin screen.
    pub fn handle_submit_order(
        &self,
        principal: &Principal,
        request: SubmitOrderRequest,
    ) -> SubmitOrderResponse {
        // Security: only authenticated callers may write ranks
        if !principal.is_authenticated() {
            warn!("[ts-core] Unauthenticated order submission rejected");
            return SubmitOrderResponse::failure(OrderingError::Unauthenticated.to_string());
        }

        info!(
            "[ts-core] Processing order submission with {} rows",
            request.rows.len()
        );

        let mut invalid = 0u32;
        let mut unpositioned = 0usize;
        let mut seen = BTreeSet::new();
        let mut rows: Vec<(u32, Option<TermId>)> = Vec::with_capacity(request.rows.len());
        for row in request.rows.positioned() {
            let (position, raw) = match row {
                Ok(positioned) => positioned,
                Err(key) => {
                    warn!("[ts-core] Row key {:?} is not a position, skipping", key);
                    invalid += 1;
                    unpositioned += 1;
                    continue;
                }
            };

            let entry = parse_row(raw);
            if let RowEntry::Invalid(value) = &entry {
                warn!(
                    "[ts-core] Row {} is not a term id, skipping: {:?}",
                    position, value
                );
                invalid += 1;
            }
            if !seen.insert(position) {
                warn!(
                    "[ts-core] Position {} submitted more than once, writing each row",
                    position
                );
            }
            rows.push((position, entry.term_id()));
        }

        match self.service.assign_positions(&rows) {
            Ok(summary) => {
                info!(
                    "[ts-core] ✓ Stored order for {} terms ({} rows skipped)",
                    summary.written,
                    summary.skipped + unpositioned
                );
                SubmitOrderResponse {
                    success: true,
                    metrics: SubmissionMetrics {
                        written: summary.written as u32,
                        skipped: (summary.skipped + unpositioned) as u32,
                        invalid,
                    },
                    error: None,
                }
            }
            Err(e) => {
                error!("[ts-core] ❌ Order submission failed: {}", e);
                SubmitOrderResponse::failure(e.to_string())
            }
        }
    }

    /// Handle component teardown.
    ///
    /// Without `ActivatePlugins` this silently does nothing.
    pub fn handle_teardown(&self, principal: &Principal) -> TeardownOutcome {
        if !principal.can(Capability::ActivatePlugins) {
            debug!("[ts-core] Teardown without plugin capability ignored");
            return TeardownOutcome::Skipped;
        }

        match self.service.purge_ranks() {
            Ok(removed) => {
                info!("[ts-core] ✓ Teardown removed {} stored ranks", removed);
                TeardownOutcome::Purged { removed }
            }
            Err(e) => {
                error!("[ts-core] ❌ Teardown purge failed: {}", e);
                TeardownOutcome::Failed {
                    error: e.to_string(),
                }
            }
        }
    }
}
