//! # Parallel Pair Counter

use rayon::prelude::*;

use crate::pairs::PairCounts;
use crate::types::TokenType;

/// The smallest range of pair positions worth a rayon task.
pub const MIN_PARALLEL_CHUNK: usize = 1 << 14;

/// Count the adjacent pairs of a token sequence with ``rayon``.
///
/// The positions are split into disjoint ranges, counted independently,
/// and folded with [`PairCounts::merge`]; the result is identical to
/// [`crate::pairs::count_pairs`].
#[cfg_attr(feature = "tracing", tracing::instrument(skip(tokens)))]
pub fn par_count_pairs<T: TokenType>(tokens: &[T]) -> PairCounts<T> {
    let positions = tokens.len().saturating_sub(1);

    let chunk = positions
        .div_ceil(rayon::current_num_threads() * 4)
        .max(MIN_PARALLEL_CHUNK);

    let starts: Vec<usize> = (0..positions).step_by(chunk).collect();

    starts
        .into_par_iter()
        .map(|start| PairCounts::from_range(tokens, start, (start + chunk).min(positions)))
        .reduce(PairCounts::default, |mut acc, counts| {
            acc.merge(counts);
            acc
        })
}
