//! Rank Assignment
//!
//! Turns an administrator's submitted order into store writes. The row at
//! 0-based position `i` ranks its term `i + 1`. Blank rows are skipped but
//! still occupy their position, so ranks follow the submitted layout.

use crate::domain::value_objects::{Rank, RankWrite, TermId};

/// A single submitted row after parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowEntry {
    /// Empty or whitespace-only row
    Blank,
    /// Row naming a term
    Term(TermId),
    /// Row that is not a term identifier
    Invalid(String),
}

impl RowEntry {
    pub fn term_id(&self) -> Option<TermId> {
        match self {
            RowEntry::Term(id) => Some(*id),
            RowEntry::Blank | RowEntry::Invalid(_) => None,
        }
    }
}

/// Parse one raw row from a form submission.
pub fn parse_row(raw: &str) -> RowEntry {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return RowEntry::Blank;
    }
    match trimmed.parse::<TermId>() {
        Ok(id) => RowEntry::Term(id),
        Err(_) => RowEntry::Invalid(trimmed.to_string()),
    }
}

/// Plan the writes for `(position, term)` rows.
///
/// Returns the writes in submission order and the number of skipped rows.
pub fn plan_rank_writes<I>(rows: I) -> (Vec<RankWrite>, usize)
where
    I: IntoIterator<Item = (u32, Option<TermId>)>,
{
    let mut writes = Vec::new();
    let mut skipped = 0;

    for (position, term_id) in rows {
        match term_id {
            Some(term_id) => writes.push(RankWrite::new(term_id, Rank::from_position(position))),
            None => skipped += 1,
        }
    }

    (writes, skipped)
}
