//! JSON handler for evaluating a fact snapshot.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use aircon_domain::evaluation::Evaluation;
use aircon_domain::fact::RawFacts;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the evaluate endpoint.
pub enum EvaluateResponse {
    Ok(Json<Evaluation>),
}

impl IntoResponse for EvaluateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/evaluate`: select the rule for the posted facts.
///
/// The body is taken as [`RawFacts`] so that missing or out-of-domain
/// values come back as a `422` with a readable message.
pub async fn evaluate(
    State(state): State<AppState>,
    Json(raw): Json<RawFacts>,
) -> Result<EvaluateResponse, ApiError> {
    let evaluation = state.climate_service.decide_raw(raw)?;
    Ok(EvaluateResponse::Ok(Json(evaluation)))
}
