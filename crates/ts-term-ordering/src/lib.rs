//! # Term Ordering Core
//!
//! Persistent custom display order for taxonomy terms. Terms are ranked by an
//! integer stored per term id; listings are rewritten into rank order with
//! unranked terms trailing in retrieval order.
//!
//! ## Architecture
//!
//! - **Domain**: Core entities (Term, TermRecord), value objects (TermId, Rank, SortKey)
//! - **Algorithms**: Reorder engine, rank assignment planning
//! - **Ports**: Inbound (TermOrderingApi) and Outbound (OrderStore)
//! - **Adapters**: In-memory and file-backed order stores
//! - **Application**: Service orchestration
//! - **IPC**: Handler for host requests (listing, order submission, teardown)

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ipc;
pub mod ports;

pub use adapters::{FileOrderStore, InMemoryOrderStore};
pub use application::service::TermOrderingService;
pub use config::{SortConfig, TieBreak};
pub use domain::entities::*;
pub use domain::errors::{OrderingError, StoreError};
pub use domain::value_objects::*;
pub use ipc::{
    Capability, ListingContext, Principal, SubmissionMetrics, SubmitOrderRequest,
    SubmitOrderResponse, SubmittedRows, TeardownOutcome, TermOrderingHandler,
};
pub use ports::inbound::TermOrderingApi;
pub use ports::outbound::OrderStore;
