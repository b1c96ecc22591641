//! Plain-text presentation for terminal output.

use std::fmt;

use aircon_domain::evaluation::Evaluation;
use aircon_domain::fact::Facts;
use aircon_domain::rule::Rule;

/// Human-readable report of one evaluation.
pub struct Report<'a> {
    pub facts: Option<&'a Facts>,
    pub evaluation: &'a Evaluation,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(facts) = self.facts {
            writeln!(f, "Facts: {facts}")?;
        }
        match self.evaluation {
            Evaluation::NoMatch => writeln!(f, "No matching rule found."),
            Evaluation::Matched(decision) => {
                let action = &decision.action;
                writeln!(f, "Rule applied: {}", decision.rule)?;
                writeln!(f, "  AC mode:   {}", action.mode)?;
                writeln!(f, "  Fan speed: {}", action.fan_speed)?;
                writeln!(f, "  Setpoint:  {}", action.setpoint)?;
                writeln!(f, "  Reason:    {}", action.reason)
            }
        }
    }
}

/// One line per rule, in declaration order.
pub struct RuleListing<'a>(pub &'a [Rule]);

impl fmt::Display for RuleListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in self.0 {
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}
