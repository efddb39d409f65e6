//! # Training Observers
//!
//! Hooks for progress reporting and cooperative cancellation.

use core::ops::ControlFlow;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use crate::rules::MergeRule;
use crate::types::TokenType;

/// Observes a training run.
///
/// [`TrainingObserver::before_round`] is consulted once per round,
/// before the round counts pairs; breaking there cancels the run
/// with only fully committed rules retained.
pub trait TrainingObserver<T: TokenType> {
    /// Called before each round.
    ///
    /// ## Arguments
    /// * `round` - the zero-based round about to run.
    /// * `tokens` - the current sequence.
    ///
    /// ## Returns
    /// `ControlFlow::Break(())` to cancel training.
    fn before_round(
        &mut self,
        round: usize,
        tokens: &[T],
    ) -> ControlFlow<()> {
        let _ = (round, tokens);
        ControlFlow::Continue(())
    }

    /// Called after each rule is committed.
    fn on_rule(
        &mut self,
        round: usize,
        rule: &MergeRule<T>,
    ) {
        let _ = (round, rule);
    }
}

/// The silent observer.
impl<T: TokenType> TrainingObserver<T> for () {}

/// A cancellation flag; set it to stop training at the next round.
impl<T: TokenType> TrainingObserver<T> for &AtomicBool {
    fn before_round(
        &mut self,
        _round: usize,
        _tokens: &[T],
    ) -> ControlFlow<()> {
        if self.load(Ordering::Relaxed) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

/// A shared cancellation flag.
impl<T: TokenType> TrainingObserver<T> for Arc<AtomicBool> {
    fn before_round(
        &mut self,
        round: usize,
        tokens: &[T],
    ) -> ControlFlow<()> {
        (&**self).before_round(round, tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_flag() {
        let flag = AtomicBool::new(false);
        let mut observer = &flag;

        assert_eq!(
            TrainingObserver::<u32>::before_round(&mut observer, 0, &[]),
            ControlFlow::Continue(())
        );

        flag.store(true, Ordering::Relaxed);
        assert_eq!(
            TrainingObserver::<u32>::before_round(&mut observer, 1, &[]),
            ControlFlow::Break(())
        );
    }

    #[test]
    fn test_shared_cancel_flag() {
        let mut flag = Arc::new(AtomicBool::new(true));
        assert_eq!(
            TrainingObserver::<u16>::before_round(&mut flag, 0, &[1, 2]),
            ControlFlow::Break(())
        );
    }
}
