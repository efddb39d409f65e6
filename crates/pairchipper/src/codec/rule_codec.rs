//! # Rule Replay Codec

use std::sync::Arc;

use crate::byte_stream::byte_tokens;
use crate::codec::{TokenDecoder, TokenEncoder};
use crate::errors::DecodeError;
use crate::merging::{expand_token, merge_pair_in_place};
use crate::rules::RuleSet;
use crate::types::{TokenType, token_u64};

/// Encodes and decodes by replaying a learned [`RuleSet`].
///
/// Encoding applies every rule in learned order;
/// decoding expands every rule in exact reverse order.
///
/// The rule set is shared, never copied; clones are cheap.
#[derive(Debug, Clone)]
pub struct RuleCodec<T: TokenType> {
    rules: Arc<RuleSet<T>>,
}

impl<T: TokenType> RuleCodec<T> {
    /// Create a new codec.
    ///
    /// ## Arguments
    /// * `rules` - The learned rules.
    ///
    /// ## Returns
    /// A new `RuleCodec` instance.
    pub fn new<R>(rules: R) -> Self
    where
        R: Into<Arc<RuleSet<T>>>,
    {
        Self {
            rules: rules.into(),
        }
    }

    /// The shared rule set.
    pub fn rules(&self) -> &Arc<RuleSet<T>> {
        &self.rules
    }

    /// Expand composite tokens down to byte tokens, where rules allow.
    fn expand(
        &self,
        tokens: &[T],
    ) -> Vec<T> {
        let mut tokens = tokens.to_vec();
        for rule in self.rules.iter().rev() {
            if tokens.contains(&rule.new_token) {
                tokens = expand_token(&tokens, rule.new_token, rule.pair);
            }
        }
        tokens
    }
}

impl<T: TokenType> TokenEncoder<T> for RuleCodec<T> {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, bytes)))]
    fn encode_bytes(
        &self,
        bytes: &[u8],
    ) -> Vec<T> {
        let mut tokens: Vec<T> = byte_tokens(bytes);
        for rule in self.rules.iter() {
            if tokens.len() < 2 {
                break;
            }
            merge_pair_in_place(&mut tokens, rule.pair, rule.new_token);
        }
        tokens
    }
}

impl<T: TokenType> TokenDecoder<T> for RuleCodec<T> {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tokens)))]
    fn decode_to_bytes(
        &self,
        tokens: &[T],
    ) -> Result<Vec<u8>, DecodeError> {
        let expanded = self.expand(tokens);

        let mut bytes = Vec::with_capacity(expanded.len());
        for (position, &token) in expanded.iter().enumerate() {
            match token.to_u8() {
                Some(b) => bytes.push(b),
                None => {
                    return Err(DecodeError::UnresolvedToken {
                        token: token_u64(token),
                        position,
                        partial: bytes,
                    });
                }
            }
        }
        Ok(bytes)
    }
}
