//! # Merge Rules

use serde::{Deserialize, Serialize};

use crate::errors::RuleSetFormatError;
use crate::types::{PCHashSet, Pair, TokenType, is_byte_token, token_u64};

/// A learned ``(a, b) -> new_token`` merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MergeRule<T: TokenType> {
    /// The merged pair.
    pub pair: Pair<T>,

    /// The composite token which replaces `pair`.
    pub new_token: T,

    /// The pair frequency observed when the rule was learned.
    ///
    /// Informational; replay does not use it.
    pub count: usize,
}

impl<T: TokenType> MergeRule<T> {
    /// Create a new rule.
    pub fn new(
        pair: Pair<T>,
        new_token: T,
        count: usize,
    ) -> Self {
        Self {
            pair,
            new_token,
            count,
        }
    }
}

/// Validate an ordered rule list.
///
/// - every `new_token` is above the byte range;
/// - `new_token`s are strictly increasing;
/// - every pair operand is a byte, or the `new_token` of an earlier rule.
///
/// ## Returns
/// The first violation found.
pub fn try_validate_rules<T: TokenType>(rules: &[MergeRule<T>]) -> Result<(), RuleSetFormatError> {
    let mut defined: PCHashSet<T> = PCHashSet::default();
    let mut previous: Option<T> = None;

    for (index, rule) in rules.iter().enumerate() {
        let token = rule.new_token;

        if is_byte_token(token) {
            return Err(RuleSetFormatError::TokenInByteRange {
                index,
                token: token_u64(token),
            });
        }

        if let Some(previous) = previous
            && token <= previous
        {
            return Err(RuleSetFormatError::NonIncreasingToken {
                index,
                token: token_u64(token),
                previous: token_u64(previous),
            });
        }

        for operand in [rule.pair.0, rule.pair.1] {
            if !is_byte_token(operand) && !defined.contains(&operand) {
                return Err(RuleSetFormatError::UndefinedOperand {
                    index,
                    operand: token_u64(operand),
                });
            }
        }

        defined.insert(token);
        previous = Some(token);
    }

    Ok(())
}

/// The ordered rules of one training run.
///
/// Learned order is encode order; its exact reverse is decode order.
/// A `RuleSet` is immutable; share it with an ``Arc``.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RuleSet<T: TokenType> {
    rules: Vec<MergeRule<T>>,
}

impl<T: TokenType> RuleSet<T> {
    /// Build a [`RuleSet`] from an ordered rule list.
    ///
    /// ## Arguments
    /// * `rules` - the rules, in learned order.
    ///
    /// ## Returns
    /// The rule set, or the first validation failure; see [`try_validate_rules`].
    pub fn try_from_rules(rules: Vec<MergeRule<T>>) -> Result<Self, RuleSetFormatError> {
        try_validate_rules(&rules)?;
        Ok(Self { rules })
    }

    /// Wrap rules produced by the learner, which are valid by construction.
    pub(crate) fn from_learned(rules: Vec<MergeRule<T>>) -> Self {
        debug_assert!(try_validate_rules(&rules).is_ok());
        Self { rules }
    }

    /// The rules, in learned order.
    pub fn rules(&self) -> &[MergeRule<T>] {
        &self.rules
    }

    /// Iterate the rules in learned order.
    pub fn iter(&self) -> core::slice::Iter<'_, MergeRule<T>> {
        self.rules.iter()
    }

    /// The number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Are there no rules?
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The first composite token, if any.
    pub fn start_token(&self) -> Option<T> {
        self.rules.first().map(|r| r.new_token)
    }

    /// The largest composite token, if any.
    pub fn max_token(&self) -> Option<T> {
        self.rules.last().map(|r| r.new_token)
    }

    /// Consume the set, returning the rules.
    pub fn into_rules(self) -> Vec<MergeRule<T>> {
        self.rules
    }
}

impl<'a, T: TokenType> IntoIterator for &'a RuleSet<T> {
    type Item = &'a MergeRule<T>;
    type IntoIter = core::slice::Iter<'a, MergeRule<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: TokenType> TryFrom<Vec<MergeRule<T>>> for RuleSet<T> {
    type Error = RuleSetFormatError;

    fn try_from(rules: Vec<MergeRule<T>>) -> Result<Self, Self::Error> {
        Self::try_from_rules(rules)
    }
}
