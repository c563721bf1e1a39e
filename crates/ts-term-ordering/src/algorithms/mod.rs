//! Algorithms module for Term Ordering
//!
//! - Reorder engine: stable sort by stored rank
//! - Rank assignment: submission rows to store writes

pub mod rank_assignment;
pub mod reorder;

pub use rank_assignment::{parse_row, plan_rank_writes, RowEntry};
pub use reorder::{assign_sort_keys, order_by_key, reorder_records, ReorderOutcome};
