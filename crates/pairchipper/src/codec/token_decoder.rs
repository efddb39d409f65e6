//! # Token Decoder Trait

use crate::errors::DecodeError;
use crate::types::TokenType;

/// Trait for token decoders.
pub trait TokenDecoder<T: TokenType>: Send + Sync {
    /// Decodes tokens into bytes.
    ///
    /// The bytes are not validated as UTF-8.
    ///
    /// ## Arguments
    /// * `tokens` - A slice of tokens to decode.
    ///
    /// ## Returns
    /// The decoded bytes, or a [`DecodeError`] carrying the partial buffer.
    fn decode_to_bytes(
        &self,
        tokens: &[T],
    ) -> Result<Vec<u8>, DecodeError>;

    /// Decodes tokens into a string.
    ///
    /// ## Returns
    /// The decoded text; or [`DecodeError::InvalidUtf8`] when the decoded
    /// bytes are not valid UTF-8.
    fn decode(
        &self,
        tokens: &[T],
    ) -> Result<String, DecodeError> {
        let bytes = self.decode_to_bytes(tokens)?;
        String::from_utf8(bytes).map_err(|err| DecodeError::InvalidUtf8 {
            valid_up_to: err.utf8_error().valid_up_to(),
            bytes: err.into_bytes(),
        })
    }

    /// Decodes a batch of token sequences into bytes.
    ///
    /// ## Returns
    /// The decoded bytes for each sequence, or the first failure.
    fn decode_batch_to_bytes(
        &self,
        batch: &[&[T]],
    ) -> Result<Vec<Vec<u8>>, DecodeError> {
        batch
            .iter()
            .map(|tokens| self.decode_to_bytes(tokens))
            .collect()
    }

    /// Decodes a batch of token sequences into strings.
    ///
    /// ## Returns
    /// The decoded text for each sequence, or the first failure.
    fn decode_batch(
        &self,
        batch: &[&[T]],
    ) -> Result<Vec<String>, DecodeError> {
        batch.iter().map(|tokens| self.decode(tokens)).collect()
    }
}
