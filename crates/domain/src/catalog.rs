//! Rule catalog: the ordered, immutable set of rules the engine evaluates.
//!
//! Declaration order matters: when two matching rules share the highest
//! priority, the one declared first wins.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::action::{Action, FanSpeed, Mode, Setpoint};
use crate::error::CatalogError;
use crate::fact::{Occupancy, TimeOfDay};
use crate::predicate::{Predicate, Threshold};
use crate::rule::Rule;

/// An ordered collection of uniquely named rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleCatalog {
    #[serde(deserialize_with = "deserialize_rules")]
    rules: Vec<Rule>,
}

fn deserialize_rules<'de, D>(deserializer: D) -> Result<Vec<Rule>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let rules = Vec::<Rule>::deserialize(deserializer)?;
    check_rules(&rules).map_err(serde::de::Error::custom)?;
    Ok(rules)
}

fn check_rules(rules: &[Rule]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(rules.len());
    for rule in rules {
        rule.validate()?;
        if !seen.insert(rule.name.as_str()) {
            return Err(CatalogError::DuplicateRuleName(rule.name.clone()));
        }
    }
    Ok(())
}

impl RuleCatalog {
    /// Build a catalog, keeping the given declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyRuleName`] for a blank name and
    /// [`CatalogError::DuplicateRuleName`] when two rules share a name.
    pub fn new(rules: impl IntoIterator<Item = Rule>) -> Result<Self, CatalogError> {
        let rules: Vec<Rule> = rules.into_iter().collect();
        check_rules(&rules)?;
        Ok(Self { rules })
    }

    /// The built-in smart air-conditioner catalog.
    #[must_use]
    pub fn standard() -> Self {
        let occupied = || Predicate::occupancy(Occupancy::Occupied);

        Self {
            rules: vec![
                rule(
                    "Windows open -> turn AC off",
                    100,
                    Predicate::windows_open(),
                    Action::new(
                        Mode::Off,
                        FanSpeed::Low,
                        Setpoint::NotApplicable,
                        "Windows are open",
                    ),
                ),
                rule(
                    "Too cold -> turn off",
                    85,
                    Predicate::temperature(Threshold::at_most(22.0)),
                    Action::new(
                        Mode::Off,
                        FanSpeed::Low,
                        Setpoint::NotApplicable,
                        "Already cold",
                    ),
                ),
                rule(
                    "No one home -> eco mode",
                    90,
                    Predicate::all([
                        Predicate::occupancy(Occupancy::Empty),
                        Predicate::temperature(Threshold::at_least(24.0)),
                    ]),
                    Action::new(
                        Mode::Eco,
                        FanSpeed::Low,
                        Setpoint::Celsius(27),
                        "Home empty; save energy",
                    ),
                ),
                rule(
                    "Hot & humid (occupied) -> cool strong",
                    80,
                    Predicate::all([
                        occupied(),
                        Predicate::temperature(Threshold::at_least(30.0)),
                        Predicate::humidity(Threshold::at_least(70.0)),
                    ]),
                    Action::new(
                        Mode::Cool,
                        FanSpeed::High,
                        Setpoint::Celsius(23),
                        "Hot and humid",
                    ),
                ),
                rule(
                    "Night (occupied) -> sleep mode",
                    75,
                    Predicate::all([
                        occupied(),
                        Predicate::time_of_day(TimeOfDay::Night),
                        Predicate::temperature(Threshold::at_least(26.0)),
                    ]),
                    Action::new(
                        Mode::Sleep,
                        FanSpeed::Low,
                        Setpoint::Celsius(26),
                        "Night comfort",
                    ),
                ),
                rule(
                    "Hot (occupied) -> cool",
                    70,
                    Predicate::all([
                        occupied(),
                        Predicate::temperature(Threshold::at_least(28.0)),
                    ]),
                    Action::new(
                        Mode::Cool,
                        FanSpeed::Medium,
                        Setpoint::Celsius(24),
                        "Temperature high",
                    ),
                ),
                rule(
                    "Slightly warm (occupied) -> gentle cool",
                    60,
                    Predicate::all([
                        occupied(),
                        Predicate::temperature(Threshold::between(26.0, 28.0)),
                    ]),
                    Action::new(
                        Mode::Cool,
                        FanSpeed::Low,
                        Setpoint::Celsius(25),
                        "Slightly warm",
                    ),
                ),
            ],
        }
    }

    /// Rules in declaration order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Look up a rule by its name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleCatalog {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

fn rule(name: &str, priority: i32, predicate: Predicate, action: Action) -> Rule {
    Rule {
        name: name.to_string(),
        priority,
        predicate,
        action,
    }
}
