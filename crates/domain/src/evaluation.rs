//! Evaluation result: which rule fired, or an explicit no-match.

use serde::{Deserialize, Serialize};

use crate::action::Action;

/// The rule selected for a snapshot and the action it recommends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Name of the rule that fired.
    pub rule: String,
    pub action: Action,
}

/// Outcome of evaluating a snapshot against a catalog.
///
/// `NoMatch` is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Evaluation {
    Matched(Decision),
    NoMatch,
}

impl Evaluation {
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matched(_))
    }

    #[must_use]
    pub fn decision(&self) -> Option<&Decision> {
        match self {
            Self::Matched(decision) => Some(decision),
            Self::NoMatch => None,
        }
    }

    /// Name of the rule that fired, if any.
    #[must_use]
    pub fn rule_name(&self) -> Option<&str> {
        self.decision().map(|d| d.rule.as_str())
    }

    #[must_use]
    pub fn action(&self) -> Option<&Action> {
        self.decision().map(|d| &d.action)
    }
}
