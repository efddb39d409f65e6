//! # Merge Rule Training
//!
//! Learns an ordered [`crate::rules::RuleSet`] from a token sequence.
//!
//! Each round counts the adjacent pairs of the current sequence once,
//! then merges the top ranked pair (or pairs; see [`BatchMode`]),
//! allocating composite tokens upwards from `start_token`.
//!
//! Training stops at the round budget, when fewer than 2 tokens remain,
//! when no pair reaches `min_pair_count`, or when a [`TrainingObserver`]
//! cancels it; see [`StopReason`].
//!
//! ## Training Example
//!
//! ```rust
//! use pairchipper::training::{StopReason, TrainingOptions};
//!
//! let learner = TrainingOptions::new(2).init::<u32>().unwrap();
//! let results = learner.train_text("aaaa");
//!
//! assert_eq!(results.tokens, vec![256, 256]);
//! assert_eq!(results.rules.len(), 1);
//! assert_eq!(results.stop_reason, StopReason::NoPairFrequencyAboveThreshold);
//! ```

mod observer;
mod rule_learner;
mod summary;
mod training_options;

#[doc(inline)]
pub use observer::TrainingObserver;
#[doc(inline)]
pub use rule_learner::{LearnerState, RuleLearner, StopReason, TrainResults, TrainingSession};
#[doc(inline)]
pub use summary::CompressionSummary;
#[doc(inline)]
pub use training_options::{BatchMode, TrainingOptions};
