//! # Training Options

use crate::errors::ConfigError;
use crate::training::RuleLearner;
use crate::types::{DEFAULT_START_TOKEN, MAX_BYTE_TOKEN, TokenType};

/// How a round selects more than one pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum BatchMode {
    /// Rank pairs once per round, then merge the top `pairs_per_round`
    /// in rank order.
    ///
    /// Counts are not refreshed between the merges of a batch; later
    /// rules may record counts that earlier merges in the same round
    /// consumed. Rule output is reproducible under this mode.
    #[default]
    Snapshot,

    /// Recount the sequence before each merge of a round.
    ///
    /// Produces different rules than [`BatchMode::Snapshot`].
    Recount,
}

/// Options for [`RuleLearner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingOptions {
    /// The first composite token id; must be > 255.
    pub start_token: u64,

    /// The round budget.
    pub num_rounds: usize,

    /// The maximum rules learned per round.
    ///
    /// `1` learns the single best pair per round;
    /// larger values learn a batch, see [`BatchMode`].
    pub pairs_per_round: usize,

    /// The minimum count for a pair to be merged; must be >= 2.
    pub min_pair_count: usize,

    /// The batch selection mode, when `pairs_per_round > 1`.
    pub batch_mode: BatchMode,

    /// Sequences at least this long are counted in parallel.
    ///
    /// Only used with the ``rayon`` feature.
    pub parallel_threshold: usize,
}

impl Default for TrainingOptions {
    fn default() -> Self {
        Self {
            start_token: DEFAULT_START_TOKEN,
            num_rounds: 500,
            pairs_per_round: 1,
            min_pair_count: 2,
            batch_mode: BatchMode::Snapshot,
            parallel_threshold: 1 << 20,
        }
    }
}

impl TrainingOptions {
    /// Create new options.
    ///
    /// ## Arguments
    /// * `num_rounds` - The round budget.
    ///
    /// ## Returns
    /// A new `TrainingOptions` instance, with defaults for everything else.
    pub fn new(num_rounds: usize) -> Self {
        Self {
            num_rounds,
            ..Default::default()
        }
    }

    /// Sets the first composite token id.
    pub fn with_start_token(
        self,
        start_token: u64,
    ) -> Self {
        Self {
            start_token,
            ..self
        }
    }

    /// Sets the round budget.
    pub fn with_num_rounds(
        self,
        num_rounds: usize,
    ) -> Self {
        Self { num_rounds, ..self }
    }

    /// Sets the maximum rules learned per round.
    pub fn with_pairs_per_round(
        self,
        pairs_per_round: usize,
    ) -> Self {
        Self {
            pairs_per_round,
            ..self
        }
    }

    /// Sets the minimum mergeable pair count.
    pub fn with_min_pair_count(
        self,
        min_pair_count: usize,
    ) -> Self {
        Self {
            min_pair_count,
            ..self
        }
    }

    /// Sets the batch selection mode.
    pub fn with_batch_mode(
        self,
        batch_mode: BatchMode,
    ) -> Self {
        Self { batch_mode, ..self }
    }

    /// Sets the parallel counting threshold.
    pub fn with_parallel_threshold(
        self,
        parallel_threshold: usize,
    ) -> Self {
        Self {
            parallel_threshold,
            ..self
        }
    }

    /// The most rules the budget can emit.
    pub fn max_rules(&self) -> u64 {
        (self.num_rounds as u64).saturating_mul(self.pairs_per_round as u64)
    }

    /// Validate these options for token type `T`.
    ///
    /// ## Returns
    /// The start token as a `T`, or the first violation found.
    pub fn validate<T: TokenType>(&self) -> Result<T, ConfigError> {
        let start = self.start_token;

        if start <= MAX_BYTE_TOKEN {
            return Err(ConfigError::StartTokenTooSmall { start });
        }
        if self.pairs_per_round < 1 {
            return Err(ConfigError::PairsPerRoundTooSmall {
                pairs_per_round: self.pairs_per_round,
            });
        }
        if self.min_pair_count < 2 {
            return Err(ConfigError::MinPairCountTooSmall {
                min_pair_count: self.min_pair_count,
            });
        }

        let start_token = T::from_u64(start).ok_or(ConfigError::StartTokenOutOfRange { start })?;

        // The next unused token must also fit.
        let max_rules = self.max_rules();
        let capacity = T::max_value().to_u64().unwrap_or(u64::MAX);
        if start.checked_add(max_rules).is_none_or(|end| end > capacity) {
            return Err(ConfigError::TokenSpaceExhausted { start, max_rules });
        }

        Ok(start_token)
    }

    /// Initializes a [`RuleLearner`] from these options.
    ///
    /// ## Returns
    /// A new `RuleLearner`, or the [`ConfigError`] from [`Self::validate`].
    pub fn init<T: TokenType>(self) -> Result<RuleLearner<T>, ConfigError> {
        RuleLearner::new(self)
    }
}
