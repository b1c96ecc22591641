//! Shared application state for axum handlers.

use std::sync::Arc;

use aircon_app::services::climate_service::ClimateService;

/// Application state shared across all axum handlers.
///
/// The service is read-only once built, so handlers share it through an
/// `Arc` without any locking.
#[derive(Clone)]
pub struct AppState {
    /// Decision service wrapping the rule engine.
    pub climate_service: Arc<ClimateService>,
}

impl AppState {
    /// Create a new application state from a service instance.
    pub fn new(climate_service: ClimateService) -> Self {
        Self {
            climate_service: Arc::new(climate_service),
        }
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    pub fn from_arc(climate_service: Arc<ClimateService>) -> Self {
        Self { climate_service }
    }
}
