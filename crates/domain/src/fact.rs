//! Fact snapshot: the observed environment at one evaluation instant.
//!
//! [`Facts`] is always complete and in-domain: the only ways to obtain one
//! are the [`FactsBuilder`] and the [`RawFacts`] conversion, both of which
//! reject missing fields, unknown categories and non-finite readings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidFactError;

/// Whether anyone is home.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum Occupancy {
    Occupied,
    Empty,
}

impl Occupancy {
    pub const ALL: [Self; 2] = [Self::Occupied, Self::Empty];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Occupied => "OCCUPIED",
            Self::Empty => "EMPTY",
        }
    }
}

/// Coarse period of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    pub const ALL: [Self; 4] = [Self::Morning, Self::Afternoon, Self::Evening, Self::Night];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "MORNING",
            Self::Afternoon => "AFTERNOON",
            Self::Evening => "EVENING",
            Self::Night => "NIGHT",
        }
    }
}

/// Upper-case the input and unify `-` and spaces to `_`.
fn normalize(value: &str) -> String {
    value
        .trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            other => other.to_ascii_uppercase(),
        })
        .collect()
}

impl FromStr for Occupancy {
    type Err = InvalidFactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "OCCUPIED" => Ok(Self::Occupied),
            "EMPTY" => Ok(Self::Empty),
            _ => Err(InvalidFactError::UnknownOccupancy(s.to_string())),
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = InvalidFactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "MORNING" => Ok(Self::Morning),
            "AFTERNOON" => Ok(Self::Afternoon),
            "EVENING" => Ok(Self::Evening),
            "NIGHT" => Ok(Self::Night),
            _ => Err(InvalidFactError::UnknownTimeOfDay(s.to_string())),
        }
    }
}

impl TryFrom<String> for Occupancy {
    type Error = InvalidFactError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = InvalidFactError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Occupancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete, validated snapshot of the environment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFacts")]
pub struct Facts {
    temperature: f64,
    humidity: f64,
    occupancy: Occupancy,
    time_of_day: TimeOfDay,
    windows_open: bool,
}

impl Facts {
    /// Create a builder for constructing [`Facts`].
    #[must_use]
    pub fn builder() -> FactsBuilder {
        FactsBuilder::default()
    }

    /// Indoor temperature in degrees Celsius.
    #[must_use]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Relative humidity in percent.
    #[must_use]
    pub fn humidity(&self) -> f64 {
        self.humidity
    }

    #[must_use]
    pub fn occupancy(&self) -> Occupancy {
        self.occupancy
    }

    #[must_use]
    pub fn time_of_day(&self) -> TimeOfDay {
        self.time_of_day
    }

    #[must_use]
    pub fn windows_open(&self) -> bool {
        self.windows_open
    }
}

impl fmt::Display for Facts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "temperature={}, humidity={}, occupancy={}, time_of_day={}, windows_open={}",
            self.temperature, self.humidity, self.occupancy, self.time_of_day, self.windows_open
        )
    }
}

/// Step-by-step builder for [`Facts`].
#[derive(Debug, Default)]
pub struct FactsBuilder {
    temperature: Option<f64>,
    humidity: Option<f64>,
    occupancy: Option<Occupancy>,
    time_of_day: Option<TimeOfDay>,
    windows_open: Option<bool>,
}

impl FactsBuilder {
    #[must_use]
    pub fn temperature(mut self, celsius: f64) -> Self {
        self.temperature = Some(celsius);
        self
    }

    #[must_use]
    pub fn humidity(mut self, percent: f64) -> Self {
        self.humidity = Some(percent);
        self
    }

    #[must_use]
    pub fn occupancy(mut self, occupancy: Occupancy) -> Self {
        self.occupancy = Some(occupancy);
        self
    }

    #[must_use]
    pub fn time_of_day(mut self, time_of_day: TimeOfDay) -> Self {
        self.time_of_day = Some(time_of_day);
        self
    }

    #[must_use]
    pub fn windows_open(mut self, open: bool) -> Self {
        self.windows_open = Some(open);
        self
    }

    /// Consume the builder and return a complete [`Facts`] snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFactError::MissingField`] when any attribute was not
    /// supplied, or [`InvalidFactError::NonFinite`] for a `NaN`/infinite
    /// reading.
    pub fn build(self) -> Result<Facts, InvalidFactError> {
        let temperature = finite(
            "temperature",
            self.temperature
                .ok_or(InvalidFactError::MissingField("temperature"))?,
        )?;
        let humidity = finite(
            "humidity",
            self.humidity
                .ok_or(InvalidFactError::MissingField("humidity"))?,
        )?;
        Ok(Facts {
            temperature,
            humidity,
            occupancy: self
                .occupancy
                .ok_or(InvalidFactError::MissingField("occupancy"))?,
            time_of_day: self
                .time_of_day
                .ok_or(InvalidFactError::MissingField("time_of_day"))?,
            windows_open: self
                .windows_open
                .ok_or(InvalidFactError::MissingField("windows_open"))?,
        })
    }
}

fn finite(field: &'static str, value: f64) -> Result<f64, InvalidFactError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InvalidFactError::NonFinite { field, value })
    }
}

/// Parse a numeric reading typed by an operator.
///
/// # Errors
///
/// Returns [`InvalidFactError::Unparsable`] when `value` is not a number.
pub fn parse_reading(field: &'static str, value: &str) -> Result<f64, InvalidFactError> {
    value
        .trim()
        .parse()
        .map_err(|_| InvalidFactError::Unparsable {
            field,
            value: value.to_string(),
        })
}

/// Untrusted fact input as collected from an operator, a sensor or a request.
///
/// Every field is optional and categories are free text; convert with
/// [`Facts::try_from`] before evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawFacts {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub occupancy: Option<String>,
    pub time_of_day: Option<String>,
    pub windows_open: Option<bool>,
}

impl TryFrom<RawFacts> for Facts {
    type Error = InvalidFactError;

    fn try_from(raw: RawFacts) -> Result<Self, Self::Error> {
        let mut builder = Facts::builder();
        if let Some(celsius) = raw.temperature {
            builder = builder.temperature(celsius);
        }
        if let Some(percent) = raw.humidity {
            builder = builder.humidity(percent);
        }
        if let Some(occupancy) = raw.occupancy {
            builder = builder.occupancy(occupancy.parse()?);
        }
        if let Some(time_of_day) = raw.time_of_day {
            builder = builder.time_of_day(time_of_day.parse()?);
        }
        if let Some(open) = raw.windows_open {
            builder = builder.windows_open(open);
        }
        builder.build()
    }
}

impl From<Facts> for RawFacts {
    fn from(facts: Facts) -> Self {
        Self {
            temperature: Some(facts.temperature),
            humidity: Some(facts.humidity),
            occupancy: Some(facts.occupancy.to_string()),
            time_of_day: Some(facts.time_of_day.to_string()),
            windows_open: Some(facts.windows_open),
        }
    }
}
