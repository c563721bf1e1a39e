//! Domain invariants for Term Ordering
//!
//! Checks over a reorder result. `rank_of` answers the explicit rank of a
//! record (None when unranked or id-less).

/// Ranked records appear in non-decreasing rank order.
pub fn invariant_rank_order<T, F>(output: &[T], rank_of: F) -> bool
where
    F: Fn(&T) -> Option<u64>,
{
    let ranks: Vec<u64> = output.iter().filter_map(&rank_of).collect();
    ranks.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Unranked records keep their input relative order.
pub fn invariant_unranked_order<T, F>(input: &[T], output: &[T], rank_of: F) -> bool
where
    T: PartialEq,
    F: Fn(&T) -> Option<u64>,
{
    let before: Vec<&T> = input.iter().filter(|r| rank_of(*r).is_none()).collect();
    let after: Vec<&T> = output.iter().filter(|r| rank_of(*r).is_none()).collect();
    before == after
}

/// Output holds exactly the input records, nothing lost or invented.
pub fn invariant_completeness<T>(input: &[T], output: &[T]) -> bool
where
    T: Ord + Clone,
{
    let mut before = input.to_vec();
    let mut after = output.to_vec();
    before.sort();
    after.sort();
    before == after
}
