//! Rule: a named, prioritized (predicate, action) pair.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::error::CatalogError;
use crate::fact::Facts;
use crate::predicate::Predicate;

/// A production rule.
///
/// A higher `priority` means more specific or more urgent. Priorities do not
/// have to be unique; see [`RuleEngine`](crate::engine::RuleEngine) for how
/// ties are resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    pub priority: i32,
    pub predicate: Predicate,
    pub action: Action,
}

impl Rule {
    /// Create a builder for constructing a [`Rule`].
    #[must_use]
    pub fn builder() -> RuleBuilder {
        RuleBuilder::default()
    }

    /// Whether the rule's predicate holds for `facts`.
    #[must_use]
    pub fn applies_to(&self, facts: &Facts) -> bool {
        self.predicate.matches(facts)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyRuleName`] when `name` is blank.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::EmptyRuleName);
        }
        Ok(())
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: when {} then {}",
            self.priority, self.name, self.predicate, self.action
        )
    }
}

/// Step-by-step builder for [`Rule`].
#[derive(Debug, Default)]
pub struct RuleBuilder {
    name: Option<String>,
    priority: i32,
    predicate: Option<Predicate>,
    action: Option<Action>,
}

impl RuleBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    #[must_use]
    pub fn when(mut self, predicate: Predicate) -> Self {
        self.predicate = Some(predicate);
        self
    }

    #[must_use]
    pub fn then(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    /// Consume the builder, validate, and return a [`Rule`].
    ///
    /// A rule without a predicate always applies.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyRuleName`] if the name is missing or blank,
    /// or [`CatalogError::MissingAction`] if no action was given.
    pub fn build(self) -> Result<Rule, CatalogError> {
        let rule = Rule {
            name: self.name.unwrap_or_default(),
            priority: self.priority,
            predicate: self.predicate.unwrap_or_else(|| Predicate::all([])),
            action: self.action.ok_or(CatalogError::MissingAction)?,
        };
        rule.validate()?;
        Ok(rule)
    }
}
