//! # Rayon Utilities
//!
//! [`rayon`] powered wrappers for batch encoding and decoding.

mod rayon_codec;

pub use rayon_codec::ParallelRayonCodec;
