//! # Adjacent Pair Counting
//!
//! [`count_pairs`] produces the per-round frequency snapshot the learner
//! selects merges from; [`PairCounts`] ranks it deterministically.
//!
//! With the ``rayon`` feature, [`par_count_pairs`] computes the same
//! counts over disjoint ranges in parallel.

mod pair_counter;
#[doc(inline)]
pub use pair_counter::{PairCounts, PairStat, PairStatMap, count_pairs};

#[cfg(feature = "rayon")]
mod par_pair_counter;
#[cfg(feature = "rayon")]
#[doc(inline)]
pub use par_pair_counter::{MIN_PARALLEL_CHUNK, par_count_pairs};
