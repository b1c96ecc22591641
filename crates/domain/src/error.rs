//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`AirconError`] via `#[from]`. [`CatalogError`] stays separate: catalogs
//! are built once at startup, never while serving a request.

/// Top-level error for the aircon workspace.
#[derive(Debug, thiserror::Error)]
pub enum AirconError {
    #[error("invalid fact")]
    InvalidFact(#[from] InvalidFactError),

    #[error("fact source failed")]
    Source(#[from] SourceError),
}

/// A fact snapshot that lies outside the declared domain.
///
/// Rejected before evaluation so that malformed input never looks like a
/// legitimate "no rule applies" outcome.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidFactError {
    #[error("missing fact: {0}")]
    MissingField(&'static str),

    #[error("unknown occupancy: {0:?} (expected OCCUPIED or EMPTY)")]
    UnknownOccupancy(String),

    #[error("unknown time of day: {0:?} (expected MORNING, AFTERNOON, EVENING or NIGHT)")]
    UnknownTimeOfDay(String),

    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("{field} is not a number: {value:?}")]
    Unparsable { field: &'static str, value: String },
}

/// Rule catalog construction failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("rule name cannot be empty")]
    EmptyRuleName,

    #[error("duplicate rule name: {0}")]
    DuplicateRuleName(String),

    #[error("rule has no action")]
    MissingAction,
}

/// A setpoint that is neither `<n>°C` nor the `-` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid setpoint: {0:?}")]
pub struct InvalidSetpointError(pub String);

/// Failure while collecting a fact snapshot from an input source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read facts")]
    Io(#[from] std::io::Error),

    #[error("failed to decode facts")]
    Decode(#[from] serde_json::Error),
}
