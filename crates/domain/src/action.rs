//! Action: the recommendation returned when a rule fires.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidSetpointError;

/// Operating mode of the air conditioner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mode {
    Off,
    Eco,
    Cool,
    Sleep,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => f.write_str("OFF"),
            Self::Eco => f.write_str("ECO"),
            Self::Cool => f.write_str("COOL"),
            Self::Sleep => f.write_str("SLEEP"),
        }
    }
}

/// Fan level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FanSpeed {
    Low,
    Medium,
    High,
}

impl fmt::Display for FanSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => f.write_str("LOW"),
            Self::Medium => f.write_str("MEDIUM"),
            Self::High => f.write_str("HIGH"),
        }
    }
}

/// Target temperature, or `-` when the unit is switched off.
///
/// Serialized as its display form (`"23°C"` or `"-"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Setpoint {
    Celsius(i16),
    NotApplicable,
}

impl Setpoint {
    /// The `-` sentinel.
    pub const SENTINEL: &'static str = "-";
}

impl fmt::Display for Setpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Celsius(degrees) => write!(f, "{degrees}°C"),
            Self::NotApplicable => f.write_str(Self::SENTINEL),
        }
    }
}

impl FromStr for Setpoint {
    type Err = InvalidSetpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == Self::SENTINEL {
            return Ok(Self::NotApplicable);
        }
        let digits = trimmed
            .strip_suffix("°C")
            .or_else(|| trimmed.strip_suffix('C'))
            .unwrap_or(trimmed);
        digits
            .trim()
            .parse()
            .map(Self::Celsius)
            .map_err(|_| InvalidSetpointError(s.to_string()))
    }
}

impl From<Setpoint> for String {
    fn from(setpoint: Setpoint) -> Self {
        setpoint.to_string()
    }
}

impl TryFrom<String> for Setpoint {
    type Error = InvalidSetpointError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// The decision payload carried by a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub mode: Mode,
    pub fan_speed: FanSpeed,
    pub setpoint: Setpoint,
    /// Human-readable justification.
    pub reason: String,
}

impl Action {
    #[must_use]
    pub fn new(
        mode: Mode,
        fan_speed: FanSpeed,
        setpoint: Setpoint,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            mode,
            fan_speed,
            setpoint,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mode={} fan={} setpoint={} ({})",
            self.mode, self.fan_speed, self.setpoint, self.reason
        )
    }
}
