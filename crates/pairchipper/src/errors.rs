//! # Error Types

/// Invalid [`crate::training::TrainingOptions`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The start token overlaps the raw byte range.
    #[error("start token ({start}) must be > 255")]
    StartTokenTooSmall {
        /// The configured start token.
        start: u64,
    },

    /// The start token does not fit the target token type.
    #[error("start token ({start}) exceeds token type capacity")]
    StartTokenOutOfRange {
        /// The configured start token.
        start: u64,
    },

    /// The round budget can allocate more tokens than the token type holds.
    #[error("token space exhausted: start ({start}) + {max_rules} rules exceeds token type capacity")]
    TokenSpaceExhausted {
        /// The configured start token.
        start: u64,

        /// The maximum number of rules the budget can emit.
        max_rules: u64,
    },

    /// At least one pair must be merged per round.
    #[error("pairs per round ({pairs_per_round}) must be >= 1")]
    PairsPerRoundTooSmall {
        /// The configured pairs per round.
        pairs_per_round: usize,
    },

    /// Pairs seen once give no compression.
    #[error("min pair count ({min_pair_count}) must be >= 2")]
    MinPairCountTooSmall {
        /// The configured min pair count.
        min_pair_count: usize,
    },
}

/// Failure to decode a token sequence.
///
/// Each variant carries the partially decoded buffer, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// A token survived full rule expansion without resolving to a byte.
    #[error("unresolved token {token} at position {position}")]
    UnresolvedToken {
        /// The unresolved token.
        token: u64,

        /// The position of the token in the fully expanded sequence.
        position: usize,

        /// The bytes decoded before the unresolved token.
        partial: Vec<u8>,
    },

    /// The expanded bytes are not valid UTF-8.
    #[error("invalid utf-8 after byte {valid_up_to} of {len}", len = .bytes.len())]
    InvalidUtf8 {
        /// The length of the valid UTF-8 prefix.
        valid_up_to: usize,

        /// The fully expanded bytes.
        bytes: Vec<u8>,
    },
}

impl DecodeError {
    /// The partially decoded byte buffer.
    pub fn partial_bytes(&self) -> &[u8] {
        match self {
            DecodeError::UnresolvedToken { partial, .. } => partial,
            DecodeError::InvalidUtf8 { bytes, .. } => bytes,
        }
    }
}

/// A persisted rule set could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum RuleSetFormatError {
    /// The document is not a well-formed list of rule records.
    #[error("malformed rule set: {0}")]
    Json(#[from] serde_json::Error),

    /// A rule's token is not greater than the previous rule's token.
    #[error("rule {index}: token {token} does not follow previous token {previous}")]
    NonIncreasingToken {
        /// The rule index.
        index: usize,

        /// The rule's new token.
        token: u64,

        /// The previous rule's new token.
        previous: u64,
    },

    /// A rule's token collides with the raw byte range.
    #[error("rule {index}: token {token} collides with the byte range")]
    TokenInByteRange {
        /// The rule index.
        index: usize,

        /// The rule's new token.
        token: u64,
    },

    /// A pair operand is neither a byte nor an earlier rule's token.
    #[error("rule {index}: pair operand {operand} is not defined by an earlier rule")]
    UndefinedOperand {
        /// The rule index.
        index: usize,

        /// The undefined operand.
        operand: u64,
    },
}

/// Errors from pairchipper operations.
#[derive(Debug, thiserror::Error)]
pub enum PairchipperError {
    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Decoding failure.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Rule set persistence failure.
    #[error(transparent)]
    RuleSetFormat(#[from] RuleSetFormatError),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for pairchipper operations.
pub type PCResult<T> = core::result::Result<T, PairchipperError>;
