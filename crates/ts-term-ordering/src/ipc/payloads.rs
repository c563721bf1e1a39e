//! IPC Payloads for Term Ordering
//!
//! Request and response shapes exchanged with the host shell.
//!
//! ## Security
//!
//! Payloads carry no caller identity. Identity arrives separately as a
//! `Principal` supplied by the host's authentication layer.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

// ============================================================
// CALLER IDENTITY
// ============================================================

/// Where a listing was requested from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingContext {
    /// Administrative screens
    Admin,
    /// Public site
    Public,
}

/// Host capabilities relevant to term ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// May install, activate and uninstall plugins
    ActivatePlugins,
    /// May edit taxonomy terms
    ManageCategories,
}

/// Authenticated (or anonymous) caller of a host request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Host user id; `None` for anonymous callers
    #[serde(default)]
    pub user_id: Option<u64>,
    /// Capabilities granted to the caller
    #[serde(default)]
    pub capabilities: BTreeSet<Capability>,
}

impl Principal {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn user(user_id: u64) -> Self {
        Self {
            user_id: Some(user_id),
            capabilities: BTreeSet::new(),
        }
    }

    pub fn with_capability(mut self, capability: Capability) -> Self {
        self.capabilities.insert(capability);
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    pub fn can(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }
}

// ============================================================
// INCOMING REQUESTS
// ============================================================

/// Rows of a submitted order, as the admin screen posts them.
///
/// Either a plain list (position = index) or an object keyed by position,
/// which allows gaps. Null and empty values are blank rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubmittedRows {
    List(Vec<Option<String>>),
    Keyed(BTreeMap<String, Option<String>>),
}

impl Default for SubmittedRows {
    fn default() -> Self {
        SubmittedRows::List(vec![])
    }
}

impl SubmittedRows {
    pub fn len(&self) -> usize {
        match self {
            SubmittedRows::List(rows) => rows.len(),
            SubmittedRows::Keyed(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rows paired with their position. Keyed rows whose key is not a
    /// position are returned as `Err(key)`.
    pub fn positioned(&self) -> Vec<Result<(u32, &str), &str>> {
        match self {
            SubmittedRows::List(rows) => (0u32..)
                .zip(rows)
                .map(|(position, raw)| Ok((position, raw.as_deref().unwrap_or(""))))
                .collect(),
            SubmittedRows::Keyed(rows) => rows
                .iter()
                .map(|(key, raw)| match key.trim().parse::<u32>() {
                    Ok(position) => Ok((position, raw.as_deref().unwrap_or(""))),
                    Err(_) => Err(key.as_str()),
                })
                .collect(),
        }
    }
}

/// Administrator's submitted term order, posted as `rows`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmitOrderRequest {
    #[serde(default)]
    pub rows: SubmittedRows,
}

impl SubmitOrderRequest {
    /// Build from rows in submission order.
    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: SubmittedRows::List(rows.into_iter().map(|row| Some(row.into())).collect()),
        }
    }
}

// ============================================================
// OUTGOING RESPONSES
// ============================================================

/// Response to an order submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitOrderResponse {
    /// Whether the order was stored
    pub success: bool,
    /// Metrics
    pub metrics: SubmissionMetrics,
    /// Error message (if failed)
    pub error: Option<String>,
}

impl SubmitOrderResponse {
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            metrics: SubmissionMetrics::default(),
            error: Some(error.into()),
        }
    }
}

/// Submission metrics for observability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionMetrics {
    /// Ranks written
    pub written: u32,
    /// Blank or unparseable rows skipped
    pub skipped: u32,
    /// Rows that were present but not a term id
    pub invalid: u32,
}

/// Result of the teardown hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TeardownOutcome {
    /// Caller lacked the capability; nothing removed
    Skipped,
    /// Stored ranks removed
    Purged { removed: usize },
    /// Store refused the purge
    Failed { error: String },
}
