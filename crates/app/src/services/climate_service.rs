//! Climate service: use-cases for deciding what the air conditioner should do.

use aircon_domain::engine::RuleEngine;
use aircon_domain::error::AirconError;
use aircon_domain::evaluation::Evaluation;
use aircon_domain::fact::{Facts, RawFacts};
use aircon_domain::rule::Rule;

use crate::ports::FactSource;

/// Application service wrapping a [`RuleEngine`].
pub struct ClimateService {
    engine: RuleEngine,
}

impl ClimateService {
    /// Create a new service around the given engine.
    #[must_use]
    pub fn new(engine: RuleEngine) -> Self {
        Self { engine }
    }

    /// Rules in declaration order, for listing.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        self.engine.catalog().rules()
    }

    /// Decide the action for a validated snapshot.
    #[tracing::instrument(skip(self, facts), fields(facts = %facts))]
    pub fn decide(&self, facts: &Facts) -> Evaluation {
        let evaluation = self.engine.evaluate(facts);
        log_outcome(&evaluation);
        evaluation
    }

    /// Validate untrusted input, then decide.
    ///
    /// # Errors
    ///
    /// Returns [`AirconError::InvalidFact`] when the snapshot is incomplete or
    /// out of domain.
    #[tracing::instrument(skip(self, raw))]
    pub fn decide_raw(&self, raw: RawFacts) -> Result<Evaluation, AirconError> {
        let evaluation = self
            .engine
            .evaluate_raw(raw)
            .inspect_err(|err| tracing::warn!(error = %err, "rejected fact snapshot"))?;
        log_outcome(&evaluation);
        Ok(evaluation)
    }

    /// Collect a snapshot from `source`, then decide.
    ///
    /// Returns the validated facts alongside the evaluation so callers can
    /// echo what was decided on.
    ///
    /// # Errors
    ///
    /// Returns the source's error, or [`AirconError::InvalidFact`] when the
    /// collected snapshot is invalid.
    pub async fn decide_from<S: FactSource>(
        &self,
        source: &S,
    ) -> Result<(Facts, Evaluation), AirconError> {
        let raw = source.collect().await?;
        let facts = Facts::try_from(raw)
            .inspect_err(|err| tracing::warn!(error = %err, "rejected collected snapshot"))?;
        let evaluation = self.decide(&facts);
        Ok((facts, evaluation))
    }
}

fn log_outcome(evaluation: &Evaluation) {
    match evaluation {
        Evaluation::Matched(decision) => {
            tracing::info!(rule = %decision.rule, action = %decision.action, "rule applied");
        }
        Evaluation::NoMatch => tracing::info!("no matching rule"),
    }
}
