//! # Encode / Decode
//!
//! A [`RuleCodec`] replays a learned [`crate::rules::RuleSet`] over any text.
//!
//! ## Example
//!
//! ```rust
//! use pairchipper::codec::{RuleCodec, TokenDecoder, TokenEncoder};
//! use pairchipper::training::TrainingOptions;
//!
//! let results = TrainingOptions::new(10)
//!     .init::<u32>()
//!     .unwrap()
//!     .train_text("aaaa");
//!
//! let codec = RuleCodec::new(results.rules);
//! assert_eq!(codec.encode("aa"), vec![256]);
//! assert_eq!(codec.decode(&[256, 256]).unwrap(), "aaaa");
//! ```

mod rule_codec;
mod token_decoder;
mod token_encoder;

#[doc(inline)]
pub use rule_codec::RuleCodec;
#[doc(inline)]
pub use token_decoder::TokenDecoder;
#[doc(inline)]
pub use token_encoder::TokenEncoder;
