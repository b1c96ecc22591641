//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use aircon_domain::error::AirconError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`AirconError`] to an HTTP response with appropriate status code.
pub struct ApiError(AirconError);

impl From<AirconError> for ApiError {
    fn from(err: AirconError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AirconError::InvalidFact(err) => {
                (StatusCode::UNPROCESSABLE_ENTITY, format!("invalid fact: {err}"))
            }
            AirconError::Source(err) => {
                tracing::error!(error = %err, "fact source error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
