//! Rule engine: selects exactly one rule for a fact snapshot.
//!
//! Selection is a two-step algorithm:
//!
//! 1. **Filter**: every rule's predicate is evaluated against the snapshot,
//!    independently of the others.
//! 2. **Reduce**: among the matching rules, pick the greatest priority. On a
//!    tie, the rule declared first in the catalog wins.
//!
//! No matching rule yields [`Evaluation::NoMatch`]. The engine has no side
//! effects and keeps no state between calls, so one engine can be shared
//! freely across threads.

use std::sync::Arc;

use crate::catalog::RuleCatalog;
use crate::error::InvalidFactError;
use crate::evaluation::{Decision, Evaluation};
use crate::fact::{Facts, RawFacts};
use crate::rule::Rule;

/// Evaluates fact snapshots against an injected [`RuleCatalog`].
#[derive(Debug, Clone)]
pub struct RuleEngine {
    catalog: Arc<RuleCatalog>,
}

impl RuleEngine {
    #[must_use]
    pub fn new(catalog: Arc<RuleCatalog>) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// All rules whose predicate holds for `facts`, in declaration order.
    #[must_use]
    pub fn matching(&self, facts: &Facts) -> Vec<&Rule> {
        self.catalog
            .iter()
            .filter(|rule| rule.applies_to(facts))
            .collect()
    }

    /// Select the rule that applies to `facts`.
    #[must_use]
    pub fn evaluate(&self, facts: &Facts) -> Evaluation {
        match select(self.matching(facts)) {
            Some(rule) => Evaluation::Matched(Decision {
                rule: rule.name.clone(),
                action: rule.action.clone(),
            }),
            None => Evaluation::NoMatch,
        }
    }

    /// Validate untrusted input, then evaluate it.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFactError`] when the input is incomplete or out of
    /// domain. Such input is never reported as [`Evaluation::NoMatch`].
    pub fn evaluate_raw(&self, raw: RawFacts) -> Result<Evaluation, InvalidFactError> {
        let facts = Facts::try_from(raw)?;
        Ok(self.evaluate(&facts))
    }
}

/// Reduce candidates by (priority desc, declaration order asc).
///
/// `Iterator::max_by_key` keeps the *last* maximum, so the fold is written
/// out: a later candidate only replaces the current pick when its priority
/// is strictly greater.
fn select<'a>(candidates: impl IntoIterator<Item = &'a Rule>) -> Option<&'a Rule> {
    candidates
        .into_iter()
        .fold(None, |best: Option<&Rule>, candidate| match best {
            Some(current) if current.priority >= candidate.priority => Some(current),
            _ => Some(candidate),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Action, FanSpeed, Mode, Setpoint};
    use crate::fact::{Occupancy, TimeOfDay};
    use crate::predicate::{Predicate, Threshold};

    fn standard_engine() -> RuleEngine {
        RuleEngine::new(Arc::new(RuleCatalog::standard()))
    }

    fn facts(
        temperature: f64,
        humidity: f64,
        occupancy: Occupancy,
        time_of_day: TimeOfDay,
        windows_open: bool,
    ) -> Facts {
        Facts::builder()
            .temperature(temperature)
            .humidity(humidity)
            .occupancy(occupancy)
            .time_of_day(time_of_day)
            .windows_open(windows_open)
            .build()
            .unwrap()
    }

    fn always(name: &str, priority: i32, reason: &str) -> Rule {
        Rule::builder()
            .name(name)
            .priority(priority)
            .when(Predicate::all([]))
            .then(Action::new(
                Mode::Cool,
                FanSpeed::Low,
                Setpoint::Celsius(25),
                reason,
            ))
            .build()
            .unwrap()
    }

    // ── Scenarios ──────────────────────────────────────────────────

    #[test]
    fn should_turn_off_when_already_cold() {
        let result = standard_engine().evaluate(&facts(
            20.0,
            40.0,
            Occupancy::Occupied,
            TimeOfDay::Morning,
            false,
        ));
        assert_eq!(result.rule_name(), Some("Too cold -> turn off"));
        assert_eq!(result.action().map(|a| a.mode), Some(Mode::Off));
    }

    #[test]
    fn should_prefer_hot_and_humid_over_hot() {
        let engine = standard_engine();
        let snapshot = facts(31.0, 75.0, Occupancy::Occupied, TimeOfDay::Afternoon, false);

        let matched: Vec<_> = engine
            .matching(&snapshot)
            .into_iter()
            .map(|r| r.priority)
            .collect();
        assert_eq!(matched, [80, 70]);

        let action = engine.evaluate(&snapshot).action().cloned().unwrap();
        assert_eq!(action.mode, Mode::Cool);
        assert_eq!(action.fan_speed, FanSpeed::High);
        assert_eq!(action.setpoint, Setpoint::Celsius(23));
        assert_eq!(action.setpoint.to_string(), "23°C");
    }

    #[test]
    fn should_turn_off_when_windows_open_regardless_of_heat() {
        let result = standard_engine().evaluate(&facts(
            31.0,
            75.0,
            Occupancy::Occupied,
            TimeOfDay::Afternoon,
            true,
        ));
        assert_eq!(result.rule_name(), Some("Windows open -> turn AC off"));
        let action = result.action().unwrap();
        assert_eq!(action.mode, Mode::Off);
        assert_eq!(action.reason, "Windows are open");
    }

    #[test]
    fn should_switch_to_eco_when_home_empty_and_warm() {
        let result = standard_engine().evaluate(&facts(
            25.0,
            50.0,
            Occupancy::Empty,
            TimeOfDay::Afternoon,
            false,
        ));
        assert_eq!(result.rule_name(), Some("No one home -> eco mode"));
        let action = result.action().unwrap();
        assert_eq!(action.mode, Mode::Eco);
        assert_eq!(action.setpoint, Setpoint::Celsius(27));
    }

    #[test]
    fn should_turn_off_at_night_when_cold() {
        let result = standard_engine().evaluate(&facts(
            21.0,
            50.0,
            Occupancy::Occupied,
            TimeOfDay::Night,
            false,
        ));
        assert_eq!(result.rule_name(), Some("Too cold -> turn off"));
        assert_eq!(result.action().map(|a| a.mode), Some(Mode::Off));
    }

    #[test]
    fn should_return_no_match_when_no_band_is_satisfied() {
        let result = standard_engine().evaluate(&facts(
            25.0,
            50.0,
            Occupancy::Occupied,
            TimeOfDay::Morning,
            false,
        ));
        assert_eq!(result, Evaluation::NoMatch);
    }

    #[test]
    fn should_sleep_when_occupied_warm_night() {
        let result = standard_engine().evaluate(&facts(
            27.0,
            50.0,
            Occupancy::Occupied,
            TimeOfDay::Night,
            false,
        ));
        assert_eq!(result.rule_name(), Some("Night (occupied) -> sleep mode"));
        assert_eq!(result.action().map(|a| a.mode), Some(Mode::Sleep));
    }

    #[test]
    fn should_cool_gently_when_slightly_warm() {
        let result = standard_engine().evaluate(&facts(
            26.5,
            50.0,
            Occupancy::Occupied,
            TimeOfDay::Evening,
            false,
        ));
        assert_eq!(
            result.rule_name(),
            Some("Slightly warm (occupied) -> gentle cool")
        );
    }

    #[test]
    fn should_prefer_eco_over_cold_shutoff_when_both_could_apply() {
        // Overlapping bands cannot happen in the standard catalog (cold is
        // <= 22, eco is >= 24), so build one where they do.
        let cold = Rule::builder()
            .name("cold")
            .priority(85)
            .when(Predicate::temperature(Threshold::at_most(30.0)))
            .then(Action::new(
                Mode::Off,
                FanSpeed::Low,
                Setpoint::NotApplicable,
                "cold",
            ))
            .build()
            .unwrap();
        let eco = Rule::builder()
            .name("eco")
            .priority(90)
            .when(Predicate::occupancy(Occupancy::Empty))
            .then(Action::new(
                Mode::Eco,
                FanSpeed::Low,
                Setpoint::Celsius(27),
                "eco",
            ))
            .build()
            .unwrap();
        let engine = RuleEngine::new(Arc::new(RuleCatalog::new([cold, eco]).unwrap()));
        let result = engine.evaluate(&facts(
            25.0,
            50.0,
            Occupancy::Empty,
            TimeOfDay::Morning,
            false,
        ));
        assert_eq!(result.rule_name(), Some("eco"));
    }

    // ── Tie-break ──────────────────────────────────────────────────

    #[test]
    fn should_pick_first_declared_rule_on_priority_tie() {
        let snapshot = facts(25.0, 50.0, Occupancy::Occupied, TimeOfDay::Morning, false);

        let forward = RuleEngine::new(Arc::new(
            RuleCatalog::new([always("first", 50, "a"), always("second", 50, "b")]).unwrap(),
        ));
        assert_eq!(forward.evaluate(&snapshot).rule_name(), Some("first"));

        let reversed = RuleEngine::new(Arc::new(
            RuleCatalog::new([always("second", 50, "b"), always("first", 50, "a")]).unwrap(),
        ));
        assert_eq!(reversed.evaluate(&snapshot).rule_name(), Some("second"));
    }

    #[test]
    fn should_ignore_declaration_order_when_priorities_differ() {
        let snapshot = facts(25.0, 50.0, Occupancy::Occupied, TimeOfDay::Morning, false);
        let engine = RuleEngine::new(Arc::new(
            RuleCatalog::new([
                always("low", 10, "low"),
                always("tied-a", 40, "a"),
                always("high", 60, "high"),
                always("tied-b", 40, "b"),
            ])
            .unwrap(),
        ));
        assert_eq!(engine.evaluate(&snapshot).rule_name(), Some("high"));
    }

    #[test]
    fn should_return_action_unmodified_from_catalog() {
        let engine = standard_engine();
        let result = engine.evaluate(&facts(
            29.0,
            50.0,
            Occupancy::Occupied,
            TimeOfDay::Afternoon,
            false,
        ));
        let name = result.rule_name().unwrap();
        assert_eq!(
            result.action(),
            engine.catalog().get(name).map(|rule| &rule.action)
        );
    }

    #[test]
    fn should_return_no_match_for_empty_catalog() {
        let engine = RuleEngine::new(Arc::new(RuleCatalog::default()));
        let snapshot = facts(40.0, 90.0, Occupancy::Occupied, TimeOfDay::Night, true);
        assert_eq!(engine.evaluate(&snapshot), Evaluation::NoMatch);
    }

    // ── Invalid input ──────────────────────────────────────────────

    #[test]
    fn should_reject_out_of_domain_occupancy_instead_of_no_match() {
        let raw = RawFacts {
            temperature: Some(25.0),
            humidity: Some(50.0),
            occupancy: Some("VACATION".to_string()),
            time_of_day: Some("MORNING".to_string()),
            windows_open: Some(false),
        };
        assert_eq!(
            standard_engine().evaluate_raw(raw),
            Err(InvalidFactError::UnknownOccupancy("VACATION".to_string()))
        );
    }

    #[test]
    fn should_reject_partial_snapshot() {
        let raw = RawFacts {
            temperature: Some(25.0),
            ..RawFacts::default()
        };
        assert_eq!(
            standard_engine().evaluate_raw(raw),
            Err(InvalidFactError::MissingField("humidity"))
        );
    }

    #[test]
    fn should_evaluate_valid_raw_input() {
        let raw = RawFacts {
            temperature: Some(31.0),
            humidity: Some(75.0),
            occupancy: Some("occupied".to_string()),
            time_of_day: Some("afternoon".to_string()),
            windows_open: Some(false),
        };
        let result = standard_engine().evaluate_raw(raw).unwrap();
        assert_eq!(
            result.rule_name(),
            Some("Hot & humid (occupied) -> cool strong")
        );
    }

    #[test]
    fn should_share_engine_across_threads() {
        let engine = standard_engine();
        let snapshot = facts(31.0, 75.0, Occupancy::Occupied, TimeOfDay::Afternoon, false);
        let expected = engine.evaluate(&snapshot);

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| engine.evaluate(&snapshot)))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    // ── Properties ─────────────────────────────────────────────────

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn any_facts() -> impl Strategy<Value = Facts> {
            (
                -20.0f64..50.0,
                0.0f64..100.0,
                prop::sample::select(Occupancy::ALL.to_vec()),
                prop::sample::select(TimeOfDay::ALL.to_vec()),
                any::<bool>(),
            )
                .prop_map(|(t, h, o, d, w)| facts(t, h, o, d, w))
        }

        proptest! {
            #[test]
            fn evaluation_is_deterministic(snapshot in any_facts()) {
                let engine = standard_engine();
                prop_assert_eq!(engine.evaluate(&snapshot), engine.evaluate(&snapshot));
            }

            #[test]
            fn no_match_only_when_no_rule_applies(snapshot in any_facts()) {
                let engine = standard_engine();
                let result = engine.evaluate(&snapshot);
                prop_assert_eq!(result.is_match(), !engine.matching(&snapshot).is_empty());
            }

            #[test]
            fn selected_rule_has_highest_matching_priority(snapshot in any_facts()) {
                let engine = standard_engine();
                if let Some(name) = engine.evaluate(&snapshot).rule_name() {
                    let selected = engine.catalog().get(name).unwrap();
                    prop_assert!(selected.applies_to(&snapshot));
                    for other in engine.matching(&snapshot) {
                        prop_assert!(selected.priority >= other.priority);
                    }
                }
            }

            #[test]
            fn first_declared_wins_among_equal_priorities(
                snapshot in any_facts(),
                priority in -100i32..100,
                swap in any::<bool>()
            ) {
                let (a, b) = (always("a", priority, "a"), always("b", priority, "b"));
                let rules = if swap { [b, a] } else { [a, b] };
                let first = rules[0].name.clone();
                let engine = RuleEngine::new(Arc::new(RuleCatalog::new(rules).unwrap()));
                let result = engine.evaluate(&snapshot);
                prop_assert_eq!(result.rule_name(), Some(first.as_str()));
            }
        }
    }
}
