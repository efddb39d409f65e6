//! # Pair Substitution
//!
//! The one rewrite used by training, encoding, and (inverted) decoding.

mod pair_merger;
#[doc(inline)]
pub use pair_merger::{expand_token, merge_pair, merge_pair_in_place};
