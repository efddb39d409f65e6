//! # Parallel Codec

use core::marker::PhantomData;

use crate::codec::{TokenDecoder, TokenEncoder};
use crate::errors::DecodeError;
use crate::types::TokenType;

/// Batch-Level Parallel Codec Wrapper.
///
/// Enables ``rayon`` encoding and decoding of batches;
/// single texts pass straight through to the inner codec.
#[derive(Debug, Clone)]
pub struct ParallelRayonCodec<T: TokenType, C> {
    /// Wrapped codec.
    pub inner: C,

    _marker: PhantomData<T>,
}

impl<T: TokenType, C> ParallelRayonCodec<T, C> {
    /// Create a new parallel codec.
    ///
    /// ## Arguments
    /// * `inner` - The codec to wrap.
    ///
    /// ## Returns
    /// A new `ParallelRayonCodec` instance.
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }
}

impl<T, C> TokenEncoder<T> for ParallelRayonCodec<T, C>
where
    T: TokenType,
    C: TokenEncoder<T>,
{
    fn encode_bytes(
        &self,
        bytes: &[u8],
    ) -> Vec<T> {
        self.inner.encode_bytes(bytes)
    }

    fn encode_batch(
        &self,
        batch: &[&str],
    ) -> Vec<Vec<T>> {
        use rayon::prelude::*;

        batch
            .par_iter()
            .map(|text| self.inner.encode(text))
            .collect()
    }
}

impl<T, C> TokenDecoder<T> for ParallelRayonCodec<T, C>
where
    T: TokenType,
    C: TokenDecoder<T>,
{
    fn decode_to_bytes(
        &self,
        tokens: &[T],
    ) -> Result<Vec<u8>, DecodeError> {
        self.inner.decode_to_bytes(tokens)
    }

    fn decode_batch_to_bytes(
        &self,
        batch: &[&[T]],
    ) -> Result<Vec<Vec<u8>>, DecodeError> {
        use rayon::prelude::*;

        batch
            .par_iter()
            .map(|tokens| self.inner.decode_to_bytes(tokens))
            .collect()
    }

    fn decode_batch(
        &self,
        batch: &[&[T]],
    ) -> Result<Vec<String>, DecodeError> {
        use rayon::prelude::*;

        batch
            .par_iter()
            .map(|tokens| self.inner.decode(tokens))
            .collect()
    }
}
