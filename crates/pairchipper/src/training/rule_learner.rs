//! # Merge Rule Learner

use crate::byte_stream::text_tokens;
use crate::errors::ConfigError;
use crate::merging::merge_pair_in_place;
use crate::pairs::{PairCounts, count_pairs};
use crate::rules::{MergeRule, RuleSet};
use crate::training::{BatchMode, CompressionSummary, TrainingObserver, TrainingOptions};
use crate::types::{Pair, TokenType};

/// Why training stopped.
///
/// These are normal terminations, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum StopReason {
    /// The round budget was used up.
    ReachedRoundLimit,

    /// The sequence is shorter than 2 tokens.
    NoPairsLeft,

    /// No pair occurs at least `min_pair_count` times.
    NoPairFrequencyAboveThreshold,

    /// A [`TrainingObserver`] cancelled the run.
    Cancelled,
}

/// The state of a [`TrainingSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LearnerState {
    /// More rounds may run.
    Running,

    /// Training is over.
    Stopped(StopReason),
}

/// The results of a training run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainResults<T: TokenType> {
    /// The training sequence after every learned merge.
    pub tokens: Vec<T>,

    /// The next unused token id.
    pub next_token: T,

    /// The learned rules, in learned order.
    pub rules: RuleSet<T>,

    /// Why training stopped.
    pub stop_reason: StopReason,

    /// The number of completed rounds.
    pub rounds: usize,

    /// The length of the training sequence before any merge.
    pub original_len: usize,
}

impl<T: TokenType> TrainResults<T> {
    /// Summarize the compression achieved on the training sequence.
    pub fn summary(&self) -> CompressionSummary {
        CompressionSummary {
            original_len: self.original_len,
            final_len: self.tokens.len(),
            new_tokens: self.rules.len(),
        }
    }
}

/// Learns an ordered [`RuleSet`] from a token sequence.
///
/// With `pairs_per_round == 1`, each round merges the single highest
/// ranked pair. With `pairs_per_round == K > 1`, each round merges up
/// to `K` pairs; see [`BatchMode`].
///
/// Pair ranking is by descending count, ties to the earliest first
/// occurrence; see [`PairCounts`].
#[derive(Debug, Clone)]
pub struct RuleLearner<T: TokenType> {
    options: TrainingOptions,
    start_token: T,
}

impl<T: TokenType> RuleLearner<T> {
    /// Initializes a [`RuleLearner`].
    ///
    /// ## Arguments
    /// * `options` - The training options.
    ///
    /// ## Returns
    /// A new `RuleLearner`, or the options' [`ConfigError`].
    pub fn new(options: TrainingOptions) -> Result<Self, ConfigError> {
        let start_token = options.validate::<T>()?;
        Ok(Self {
            options,
            start_token,
        })
    }

    /// The learner options.
    pub fn options(&self) -> &TrainingOptions {
        &self.options
    }

    /// The first composite token id.
    pub fn start_token(&self) -> T {
        self.start_token
    }

    /// Start a step-wise training session over `tokens`.
    pub fn session(
        &self,
        tokens: Vec<T>,
    ) -> TrainingSession<'_, T> {
        TrainingSession {
            learner: self,
            original_len: tokens.len(),
            tokens,
            rules: Vec::new(),
            next_token: self.start_token,
            rounds: 0,
            state: LearnerState::Running,
        }
    }

    /// Train on the UTF-8 bytes of `text`.
    pub fn train_text(
        &self,
        text: &str,
    ) -> TrainResults<T> {
        self.train(text_tokens(text))
    }

    /// Train on `tokens` to completion.
    pub fn train(
        &self,
        tokens: Vec<T>,
    ) -> TrainResults<T> {
        self.train_with_observer(tokens, &mut ())
    }

    /// Train on `tokens`, reporting to `observer`.
    ///
    /// ## Arguments
    /// * `tokens` - the training sequence.
    /// * `observer` - progress / cancellation hooks.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tokens, observer)))]
    pub fn train_with_observer<O>(
        &self,
        tokens: Vec<T>,
        observer: &mut O,
    ) -> TrainResults<T>
    where
        O: TrainingObserver<T> + ?Sized,
    {
        let num_rounds = self.options.num_rounds;
        log::info!(
            "Starting merge training: {} tokens, {} rounds of up to {} pairs",
            tokens.len(),
            num_rounds,
            self.options.pairs_per_round,
        );

        let mut session = self.session(tokens);
        let mut last_log_percent = 0;

        while session.step(observer) == LearnerState::Running {
            // Log progress every 1%
            let current_percent = (session.rounds * 100) / num_rounds.max(1);
            if current_percent > last_log_percent {
                log::info!(
                    "Progress: {}% ({}/{} rounds) - {} rules, {} tokens",
                    current_percent,
                    session.rounds,
                    num_rounds,
                    session.rules.len(),
                    session.tokens.len(),
                );
                last_log_percent = current_percent;
            }
        }

        let results = session.into_results();
        log::info!(
            "Finished training: {} rules in {} rounds ({})",
            results.rules.len(),
            results.rounds,
            results.stop_reason,
        );
        results
    }
}

/// A step-wise training run.
///
/// Each [`TrainingSession::step`] runs one round. Rules are committed
/// one at a time; a session stopped at any point holds a consistent
/// prefix of the rule list.
#[derive(Debug)]
pub struct TrainingSession<'a, T: TokenType> {
    learner: &'a RuleLearner<T>,
    original_len: usize,
    tokens: Vec<T>,
    rules: Vec<MergeRule<T>>,
    next_token: T,
    rounds: usize,
    state: LearnerState,
}

impl<T: TokenType> TrainingSession<'_, T> {
    /// The current state.
    pub fn state(&self) -> LearnerState {
        self.state
    }

    /// The current sequence.
    pub fn tokens(&self) -> &[T] {
        &self.tokens
    }

    /// The rules committed so far.
    pub fn rules(&self) -> &[MergeRule<T>] {
        &self.rules
    }

    /// The next unused token id.
    pub fn next_token(&self) -> T {
        self.next_token
    }

    /// The number of completed rounds.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Stop the session; later steps do nothing.
    pub fn cancel(&mut self) {
        if self.state == LearnerState::Running {
            self.state = LearnerState::Stopped(StopReason::Cancelled);
        }
    }

    fn stop(
        &mut self,
        reason: StopReason,
    ) -> LearnerState {
        self.state = LearnerState::Stopped(reason);
        self.state
    }

    fn count(&self) -> PairCounts<T> {
        #[cfg(feature = "rayon")]
        if self.tokens.len() >= self.learner.options.parallel_threshold {
            return crate::pairs::par_count_pairs(&self.tokens);
        }
        count_pairs(&self.tokens)
    }

    fn commit<O>(
        &mut self,
        pair: Pair<T>,
        count: usize,
        observer: &mut O,
    ) where
        O: TrainingObserver<T> + ?Sized,
    {
        let new_token = self.next_token;
        // Options validation guarantees the token space.
        self.next_token = self.next_token + T::one();

        merge_pair_in_place(&mut self.tokens, pair, new_token);

        let rule = MergeRule::new(pair, new_token, count);
        log::debug!("merge {:?} -> {} (count: {})", pair, new_token, count);
        observer.on_rule(self.rounds, &rule);
        self.rules.push(rule);
    }

    /// Run one round.
    ///
    /// ## Arguments
    /// * `observer` - consulted before the round; may cancel it.
    ///
    /// ## Returns
    /// The state after the round.
    pub fn step<O>(
        &mut self,
        observer: &mut O,
    ) -> LearnerState
    where
        O: TrainingObserver<T> + ?Sized,
    {
        if self.state != LearnerState::Running {
            return self.state;
        }

        let options = &self.learner.options;
        let min_count = options.min_pair_count;
        let batch_size = options.pairs_per_round;
        let batch_mode = options.batch_mode;

        if self.rounds >= options.num_rounds {
            return self.stop(StopReason::ReachedRoundLimit);
        }
        if observer.before_round(self.rounds, &self.tokens).is_break() {
            return self.stop(StopReason::Cancelled);
        }
        if self.tokens.len() < 2 {
            return self.stop(StopReason::NoPairsLeft);
        }

        match batch_mode {
            BatchMode::Snapshot => {
                // One ranking for the whole batch.
                let batch = self.count().eligible(batch_size, min_count);
                if batch.is_empty() {
                    return self.stop(StopReason::NoPairFrequencyAboveThreshold);
                }
                for (pair, count) in batch {
                    if self.tokens.len() <= 1 {
                        break;
                    }
                    self.commit(pair, count, observer);
                }
            }
            BatchMode::Recount => {
                for merged in 0..batch_size {
                    if self.tokens.len() <= 1 {
                        break;
                    }
                    let Some(&(pair, count)) = self.count().eligible(1, min_count).first() else {
                        if merged == 0 {
                            return self.stop(StopReason::NoPairFrequencyAboveThreshold);
                        }
                        break;
                    };
                    self.commit(pair, count, observer);
                }
            }
        }

        self.rounds += 1;
        self.state
    }

    /// Run rounds until the session stops.
    pub fn run<O>(
        mut self,
        observer: &mut O,
    ) -> TrainResults<T>
    where
        O: TrainingObserver<T> + ?Sized,
    {
        while self.step(observer) == LearnerState::Running {}
        self.into_results()
    }

    /// Finish the session.
    ///
    /// A session which is still running is reported as [`StopReason::Cancelled`].
    pub fn into_results(self) -> TrainResults<T> {
        let stop_reason = match self.state {
            LearnerState::Stopped(reason) => reason,
            LearnerState::Running => StopReason::Cancelled,
        };
        TrainResults {
            tokens: self.tokens,
            next_token: self.next_token,
            rules: RuleSet::from_learned(self.rules),
            stop_reason,
            rounds: self.rounds,
            original_len: self.original_len,
        }
    }
}
