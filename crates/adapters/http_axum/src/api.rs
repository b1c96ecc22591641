//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod evaluate;
#[allow(clippy::missing_errors_doc)]
pub mod rules;

use axum::Router;
use axum::routing::{get, post};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/evaluate", post(evaluate::evaluate))
        .route("/rules", get(rules::list))
}
