//! JSON handler for listing the rule catalog.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use aircon_domain::rule::Rule;

use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Rule>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/rules`: list all rules in declaration order.
pub async fn list(State(state): State<AppState>) -> ListResponse {
    ListResponse::Ok(Json(state.climate_service.rules().to_vec()))
}
