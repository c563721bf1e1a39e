//! Error types for Term Ordering

use super::value_objects::TermId;
use thiserror::Error;

/// All errors that can occur in term ordering
#[derive(Debug, Error)]
pub enum OrderingError {
    /// Order store failed underneath a read or write
    #[error("Order store failure: {0}")]
    Store(#[from] StoreError),

    /// Submission carried more rows than allowed
    #[error("Submission too large: {rows} > {max}")]
    SubmissionTooLarge { rows: usize, max: usize },

    /// Order submission without an authenticated caller
    #[error("Unauthenticated order submission")]
    Unauthenticated,
}

/// Errors raised by an order store implementation
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Rank read failed for term {term_id}: {message}")]
    ReadFailed { term_id: TermId, message: String },

    #[error("Rank write failed for term {term_id}: {message}")]
    WriteFailed { term_id: TermId, message: String },

    #[error("Store I/O error: {message}")]
    Io { message: String },

    #[error("Store document corrupt: {message}")]
    Corrupt { message: String },
}
