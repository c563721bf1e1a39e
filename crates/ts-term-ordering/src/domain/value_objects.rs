//! Value objects for Term Ordering

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

/// Identifier of a taxonomy term, owned by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermId(pub u64);

impl TermId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TermId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for TermId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(TermId)
    }
}

/// Explicit display rank of a term. Always positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rank(NonZeroU64);

impl Rank {
    /// Rank for a 0-based submission position.
    pub fn from_position(position: u32) -> Self {
        // position + 1 is never zero
        Self(NonZeroU64::MIN.saturating_add(u64::from(position)))
    }

    /// Interpret a raw stored value. Zero and negatives mean "unranked".
    pub fn from_stored(raw: i64) -> Option<Self> {
        u64::try_from(raw).ok().and_then(NonZeroU64::new).map(Self)
    }

    pub fn get(&self) -> u64 {
        self.0.get()
    }

    /// Raw value as written to the store.
    pub fn to_stored(&self) -> i64 {
        i64::try_from(self.0.get()).unwrap_or(i64::MAX)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Key a record is sorted by: an explicit rank or a synthetic trailing key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SortKey(pub u64);

impl SortKey {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<Rank> for SortKey {
    fn from(rank: Rank) -> Self {
        Self(rank.get())
    }
}

/// One store write produced by a rank assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankWrite {
    pub term_id: TermId,
    pub rank: Rank,
}

impl RankWrite {
    pub fn new(term_id: TermId, rank: Rank) -> Self {
        Self { term_id, rank }
    }
}

/// Outcome of a rank assignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentSummary {
    /// Ranks written to the store
    pub written: usize,
    /// Blank or unusable rows skipped
    pub skipped: usize,
}
