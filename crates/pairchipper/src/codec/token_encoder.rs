//! # Token Encoder Trait

use crate::types::TokenType;

/// Trait for token encoders.
pub trait TokenEncoder<T: TokenType>: Send + Sync {
    /// Encodes raw bytes into tokens.
    ///
    /// ## Arguments
    /// * `bytes` - The bytes to encode.
    ///
    /// ## Returns
    /// The encoded token sequence.
    fn encode_bytes(
        &self,
        bytes: &[u8],
    ) -> Vec<T>;

    /// Encodes text into tokens.
    fn encode(
        &self,
        text: &str,
    ) -> Vec<T> {
        self.encode_bytes(text.as_bytes())
    }

    /// Encodes a batch of texts.
    ///
    /// ## Returns
    /// One token sequence per text, in batch order.
    fn encode_batch(
        &self,
        batch: &[&str],
    ) -> Vec<Vec<T>> {
        batch.iter().map(|text| self.encode(text)).collect()
    }
}
