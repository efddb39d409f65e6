//! # `pairchipper` Byte Pair Merge Learner
//!
//! `pairchipper` learns an ordered list of byte-pair merge rules from a text,
//! and replays that list as a reversible text <-> token codec.
//!
//! See:
//! * [`training`] to learn a [`rules::RuleSet`] from text.
//! * [`codec`] to encode text into tokens, and decode tokens into text.
//! * [`rules::io`] to save and load rule sets as JSON.
//! * [`pairs`] and [`merging`] for the underlying counting and rewriting passes.
//!
//! Tokens `0..=255` are raw bytes. Learned composite tokens are allocated
//! upwards from a configured start token (default `256`), one per rule.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``foldhash``
//! * ``rayon``
//!
//! #### feature: ``foldhash`` / ``ahash``
//!
//! These swap all HashMap/HashSet implementations for ``foldhash`` or ``ahash``.
//! If both are enabled, ``ahash`` wins.
//!
//! This is done by the ``types::PCHash{*}`` type alias machinery.
//!
//! #### feature: ``rayon``
//!
//! This enables parallel pair counting for long training sequences,
//! and the [`rayon::ParallelRayonCodec`] batch wrapper.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//! This is only useful for timing tracing of the library itself.
//!
//! ## Example
//!
//! ```rust
//! use pairchipper::codec::{RuleCodec, TokenDecoder, TokenEncoder};
//! use pairchipper::rules::io::{rules_from_json_str, rules_to_json_string};
//! use pairchipper::training::TrainingOptions;
//!
//! type T = u32;
//!
//! let text = "the cat sat on the mat with the hat";
//!
//! let learner = TrainingOptions::new(100).init::<T>()?;
//! let results = learner.train_text(text);
//! println!("{} ({})", results.summary(), results.stop_reason);
//!
//! let json = rules_to_json_string(&results.rules)?;
//! let rules = rules_from_json_str::<T>(&json)?;
//! assert_eq!(rules, results.rules);
//!
//! let codec = RuleCodec::new(rules);
//! let tokens = codec.encode(text);
//! assert_eq!(tokens, results.tokens);
//! assert_eq!(codec.decode(&tokens)?, text);
//! # Ok::<(), pairchipper::PairchipperError>(())
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod byte_stream;
pub mod codec;
pub mod errors;
pub mod merging;
pub mod pairs;
pub mod rules;
pub mod training;
pub mod types;

#[doc(inline)]
pub use errors::{PCResult, PairchipperError};
#[doc(inline)]
pub use rules::{MergeRule, RuleSet};
#[doc(inline)]
pub use types::{Pair, TokenType};
