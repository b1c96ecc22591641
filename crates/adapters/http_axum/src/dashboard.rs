//! Server-side rendered HTML controller page (no JavaScript).

#[allow(clippy::missing_errors_doc)]
pub mod home;
pub mod page;

use axum::Router;
use axum::routing::get;

use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(home::index).post(home::evaluate))
}
