//! Fact source port: where snapshots come from.

use std::future::Future;

use aircon_domain::error::AirconError;
use aircon_domain::fact::RawFacts;

/// Collects a raw fact snapshot from an operator, a file or sensors.
///
/// Implementations return the input as-is; validation happens in the
/// service so every source gets the same `InvalidFact` treatment.
pub trait FactSource {
    fn collect(&self) -> impl Future<Output = Result<RawFacts, AirconError>> + Send;
}

/// A snapshot that is already in hand, e.g. parsed from CLI flags.
impl FactSource for RawFacts {
    fn collect(&self) -> impl Future<Output = Result<RawFacts, AirconError>> + Send {
        let raw = self.clone();
        async { Ok(raw) }
    }
}
