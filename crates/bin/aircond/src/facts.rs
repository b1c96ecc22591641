//! Fact sources available from the command line.

use std::future::Future;
use std::path::PathBuf;

use aircon_app::ports::FactSource;
use aircon_domain::error::{AirconError, SourceError};
use aircon_domain::fact::RawFacts;

/// Reads a [`RawFacts`] snapshot from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FactSource for JsonFileSource {
    fn collect(&self) -> impl Future<Output = Result<RawFacts, AirconError>> + Send {
        async move {
            let content = tokio::fs::read_to_string(&self.path)
                .await
                .map_err(SourceError::from)?;
            let raw = serde_json::from_str(&content).map_err(SourceError::from)?;
            Ok(raw)
        }
    }
}
