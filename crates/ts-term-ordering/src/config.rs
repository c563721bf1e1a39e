//! Configuration for Term Ordering

use serde::{Deserialize, Serialize};

/// First synthetic sort key handed to an unranked term.
pub const DEFAULT_UNRANKED_KEY_BASE: u64 = 9001;

/// Meta key under which ranks are persisted.
pub const DEFAULT_META_KEY: &str = "thets_order";

/// How records sharing the same explicit rank are resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Keep every record; equal ranks retain input order.
    #[default]
    Stable,
    /// Keep only the last record per sort key, dropping earlier ones.
    LastWins,
}

impl std::str::FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stable" => Ok(TieBreak::Stable),
            "last-wins" | "last_wins" | "lastwins" => Ok(TieBreak::LastWins),
            other => Err(format!("unknown tie-break mode: {other}")),
        }
    }
}

/// Ordering configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    /// First synthetic key for unranked records
    pub unranked_key_base: u64,
    /// Resolution of equal explicit ranks
    pub tie_break: TieBreak,
    /// Maximum rows accepted in one order submission
    pub max_submission_rows: usize,
    /// Meta key the store persists ranks under
    pub meta_key: String,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            unranked_key_base: DEFAULT_UNRANKED_KEY_BASE,
            tie_break: TieBreak::Stable,
            max_submission_rows: 10_000,
            meta_key: DEFAULT_META_KEY.to_string(),
        }
    }
}
