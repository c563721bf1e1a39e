//! Reorder Engine
//!
//! Stable sort of a listing by stored rank. Every record gets a sort key:
//! its explicit rank when the store holds a positive one, otherwise a
//! synthetic key drawn from a counter that starts at the configured base
//! and advances once per unranked record. Synthetic keys are distinct and
//! increasing, so unranked records keep their input order and trail every
//! explicit rank below the base.

use crate::config::{SortConfig, TieBreak};
use crate::domain::entities::TermRecord;
use crate::domain::value_objects::{Rank, SortKey, TermId};
use std::collections::BTreeMap;

/// Result of one reorder pass.
#[derive(Debug)]
pub struct ReorderOutcome<T> {
    /// Records in key order
    pub records: Vec<T>,
    /// Records that carried an explicit rank
    pub ranked: usize,
    /// Records discarded by `TieBreak::LastWins`
    pub dropped: usize,
}

/// Pair each record with its sort key, in input order.
///
/// `rank_of` is only consulted for records that carry a term id.
pub fn assign_sort_keys<T, E, F>(
    records: Vec<T>,
    unranked_key_base: u64,
    mut rank_of: F,
) -> Result<Vec<(SortKey, T)>, E>
where
    T: TermRecord,
    F: FnMut(TermId) -> Result<Option<Rank>, E>,
{
    let mut next_unranked = unranked_key_base;
    let mut keyed = Vec::with_capacity(records.len());

    for record in records {
        let rank = match record.term_id() {
            Some(term_id) => rank_of(term_id)?,
            None => None,
        };

        let key = match rank {
            Some(rank) => SortKey::from(rank),
            None => {
                let key = SortKey(next_unranked);
                next_unranked = next_unranked.saturating_add(1);
                key
            }
        };

        keyed.push((key, record));
    }

    Ok(keyed)
}

/// Order keyed records ascending, resolving equal keys per `tie_break`.
///
/// Returns the ordered records and the number dropped.
pub fn order_by_key<T>(mut keyed: Vec<(SortKey, T)>, tie_break: TieBreak) -> (Vec<T>, usize) {
    match tie_break {
        TieBreak::Stable => {
            // sort_by_key is stable
            keyed.sort_by_key(|(key, _)| *key);
            (keyed.into_iter().map(|(_, record)| record).collect(), 0)
        }
        TieBreak::LastWins => {
            let total = keyed.len();
            let mut slots: BTreeMap<SortKey, T> = BTreeMap::new();
            for (key, record) in keyed {
                slots.insert(key, record);
            }
            let dropped = total - slots.len();
            (slots.into_values().collect(), dropped)
        }
    }
}

/// Full reorder pass: key assignment followed by ordering.
pub fn reorder_records<T, E, F>(
    records: Vec<T>,
    config: &SortConfig,
    rank_of: F,
) -> Result<ReorderOutcome<T>, E>
where
    T: TermRecord,
    F: FnMut(TermId) -> Result<Option<Rank>, E>,
{
    if records.is_empty() {
        return Ok(ReorderOutcome {
            records,
            ranked: 0,
            dropped: 0,
        });
    }

    let mut rank_of = rank_of;
    let mut ranked = 0;
    let keyed = assign_sort_keys(records, config.unranked_key_base, |term_id| {
        let rank = rank_of(term_id)?;
        if rank.is_some() {
            ranked += 1;
        }
        Ok::<_, E>(rank)
    })?;
    let (records, dropped) = order_by_key(keyed, config.tie_break);

    Ok(ReorderOutcome {
        records,
        ranked,
        dropped,
    })
}
