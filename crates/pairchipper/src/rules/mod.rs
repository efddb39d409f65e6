//! # Merge Rule Sets
//!
//! A [`RuleSet`] is the ordered output of training, and the replay
//! script for [`crate::codec::RuleCodec`].
//!
//! See [`io`] for JSON persistence.

pub mod io;

mod rule_set;
#[doc(inline)]
pub use rule_set::{MergeRule, RuleSet, try_validate_rules};
