//! Predicate: a pure boolean expression over a fact snapshot.
//!
//! Predicates are plain data rather than closures: they can be listed,
//! printed and compared, and they can only read the [`Facts`] they are
//! given.
//!
//! The built-in catalog only needs `AtLeast`, `AtMost`, `Between` and `All`.
//! The strict bounds (`Above`, `Below`) and the `Any`/`Not` combinators are
//! part of the serialized rule format, so a
//! [`RuleCatalog`](crate::catalog::RuleCatalog) deserialized from JSON can
//! express any threshold or boolean combination.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fact::{Facts, Occupancy, TimeOfDay};

/// Comparison of a numeric reading against fixed bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Threshold {
    /// `reading >= value`
    AtLeast { value: f64 },
    /// `reading <= value`
    AtMost { value: f64 },
    /// `reading > value`
    Above { value: f64 },
    /// `reading < value`
    Below { value: f64 },
    /// `from <= reading < until`
    Between { from: f64, until: f64 },
}

impl Threshold {
    #[must_use]
    pub fn at_least(value: f64) -> Self {
        Self::AtLeast { value }
    }

    #[must_use]
    pub fn at_most(value: f64) -> Self {
        Self::AtMost { value }
    }

    #[must_use]
    pub fn above(value: f64) -> Self {
        Self::Above { value }
    }

    #[must_use]
    pub fn below(value: f64) -> Self {
        Self::Below { value }
    }

    #[must_use]
    pub fn between(from: f64, until: f64) -> Self {
        Self::Between { from, until }
    }

    /// Whether `reading` satisfies the bound.
    #[must_use]
    pub fn holds(self, reading: f64) -> bool {
        match self {
            Self::AtLeast { value } => reading >= value,
            Self::AtMost { value } => reading <= value,
            Self::Above { value } => reading > value,
            Self::Below { value } => reading < value,
            Self::Between { from, until } => from <= reading && reading < until,
        }
    }

    fn write(self, f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
        match self {
            Self::AtLeast { value } => write!(f, "{name} >= {value}"),
            Self::AtMost { value } => write!(f, "{name} <= {value}"),
            Self::Above { value } => write!(f, "{name} > {value}"),
            Self::Below { value } => write!(f, "{name} < {value}"),
            Self::Between { from, until } => write!(f, "{from} <= {name} < {until}"),
        }
    }
}

/// A condition a rule requires before its action applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Predicate {
    /// At least one window is open.
    WindowsOpen,
    OccupancyIs {
        occupancy: Occupancy,
    },
    TimeOfDayIs {
        time_of_day: TimeOfDay,
    },
    Temperature {
        threshold: Threshold,
    },
    Humidity {
        threshold: Threshold,
    },
    /// Every inner predicate holds. Vacuously true when empty.
    All {
        predicates: Vec<Predicate>,
    },
    /// At least one inner predicate holds. False when empty.
    Any {
        predicates: Vec<Predicate>,
    },
    Not {
        predicate: Box<Predicate>,
    },
}

impl Predicate {
    #[must_use]
    pub fn windows_open() -> Self {
        Self::WindowsOpen
    }

    #[must_use]
    pub fn occupancy(occupancy: Occupancy) -> Self {
        Self::OccupancyIs { occupancy }
    }

    #[must_use]
    pub fn time_of_day(time_of_day: TimeOfDay) -> Self {
        Self::TimeOfDayIs { time_of_day }
    }

    #[must_use]
    pub fn temperature(threshold: Threshold) -> Self {
        Self::Temperature { threshold }
    }

    #[must_use]
    pub fn humidity(threshold: Threshold) -> Self {
        Self::Humidity { threshold }
    }

    #[must_use]
    pub fn all(predicates: impl IntoIterator<Item = Predicate>) -> Self {
        Self::All {
            predicates: predicates.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn any(predicates: impl IntoIterator<Item = Predicate>) -> Self {
        Self::Any {
            predicates: predicates.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn negate(predicate: Predicate) -> Self {
        Self::Not {
            predicate: Box::new(predicate),
        }
    }

    /// Evaluate the predicate against a snapshot.
    #[must_use]
    pub fn matches(&self, facts: &Facts) -> bool {
        match self {
            Self::WindowsOpen => facts.windows_open(),
            Self::OccupancyIs { occupancy } => facts.occupancy() == *occupancy,
            Self::TimeOfDayIs { time_of_day } => facts.time_of_day() == *time_of_day,
            Self::Temperature { threshold } => threshold.holds(facts.temperature()),
            Self::Humidity { threshold } => threshold.holds(facts.humidity()),
            Self::All { predicates } => predicates.iter().all(|p| p.matches(facts)),
            Self::Any { predicates } => predicates.iter().any(|p| p.matches(facts)),
            Self::Not { predicate } => !predicate.matches(facts),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, predicates: &[Predicate], sep: &str) -> fmt::Result {
    for (index, predicate) in predicates.iter().enumerate() {
        if index > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{predicate}")?;
    }
    Ok(())
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WindowsOpen => f.write_str("windows_open"),
            Self::OccupancyIs { occupancy } => write!(f, "occupancy == {occupancy}"),
            Self::TimeOfDayIs { time_of_day } => write!(f, "time_of_day == {time_of_day}"),
            Self::Temperature { threshold } => threshold.write(f, "temperature"),
            Self::Humidity { threshold } => threshold.write(f, "humidity"),
            Self::All { predicates } if predicates.is_empty() => f.write_str("true"),
            Self::All { predicates } => write_joined(f, predicates, " && "),
            Self::Any { predicates } if predicates.is_empty() => f.write_str("false"),
            Self::Any { predicates } => {
                f.write_str("(")?;
                write_joined(f, predicates, " || ")?;
                f.write_str(")")
            }
            Self::Not { predicate } => write!(f, "!({predicate})"),
        }
    }
}
