//! Controller page: fact form and the resulting AC decision.

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use aircon_domain::error::{AirconError, InvalidFactError};
use aircon_domain::fact::{RawFacts, parse_reading};

use super::page::{ControllerPage, FormValues, Outcome};
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the controller page.
pub enum HomeResponse {
    Ok(ControllerPage),
    /// The submitted facts were rejected; the form is shown again.
    Rejected(ControllerPage),
}

impl IntoResponse for HomeResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(page) => page.into_response(),
            Self::Rejected(page) => (StatusCode::UNPROCESSABLE_ENTITY, page).into_response(),
        }
    }
}

/// Form data as posted by the browser.
///
/// An unchecked checkbox is absent from the body, hence the `Option`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FactsForm {
    pub temperature: String,
    pub humidity: String,
    pub occupancy: String,
    pub time_of_day: String,
    pub windows_open: Option<String>,
}

impl FactsForm {
    fn values(&self) -> FormValues {
        FormValues {
            temperature: self.temperature.clone(),
            humidity: self.humidity.clone(),
            occupancy: self.occupancy.clone(),
            time_of_day: self.time_of_day.clone(),
            windows_open: self.windows_open.is_some(),
        }
    }

    fn to_raw(&self) -> Result<RawFacts, InvalidFactError> {
        Ok(RawFacts {
            temperature: reading("temperature", &self.temperature)?,
            humidity: reading("humidity", &self.humidity)?,
            occupancy: text(&self.occupancy),
            time_of_day: text(&self.time_of_day),
            windows_open: Some(self.windows_open.is_some()),
        })
    }
}

fn reading(field: &'static str, value: &str) -> Result<Option<f64>, InvalidFactError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_reading(field, value).map(Some)
}

fn text(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// `GET /`: empty form with default readings.
pub async fn index() -> HomeResponse {
    HomeResponse::Ok(ControllerPage::new(
        FormValues::default(),
        Outcome::Pending,
    ))
}

/// `POST /`: evaluate the submitted facts and show the decision.
pub async fn evaluate(
    State(state): State<AppState>,
    Form(form): Form<FactsForm>,
) -> Result<HomeResponse, ApiError> {
    let values = form.values();
    let result = form
        .to_raw()
        .map_err(AirconError::from)
        .and_then(|raw| state.climate_service.decide_raw(raw));

    match result {
        Ok(evaluation) => Ok(HomeResponse::Ok(ControllerPage::new(
            values,
            evaluation.into(),
        ))),
        Err(AirconError::InvalidFact(err)) => Ok(HomeResponse::Rejected(ControllerPage::new(
            values,
            Outcome::Rejected(err.to_string()),
        ))),
        Err(err) => Err(err.into()),
    }
}
