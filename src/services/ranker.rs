use std::cmp::Ordering;

/// Maximum number of recommendations returned for a query.
pub const MAX_RECOMMENDATIONS: usize = 30;

/// Ranks a similarity row and returns up to `limit` `(index, score)` pairs,
/// best first.
///
/// The query's own row index is excluded by identity, so duplicate titles
/// or tied perfect scores cannot leak the query back into the results. Sort
/// order is pinned: descending score, ties broken by ascending index.
pub fn rank(row: &[f32], query_index: usize, limit: usize) -> Vec<(usize, f32)> {
    let mut scored: Vec<(usize, f32)> = row
        .iter()
        .copied()
        .enumerate()
        .filter(|&(index, _)| index != query_index)
        .collect();

    scored.sort_by(|a, b| match b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.0.cmp(&b.0),
        ordering => ordering,
    });

    scored.truncate(limit);
    scored
}
