//! # aircon-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** for programmatic access
//!   (`POST /api/evaluate`, `GET /api/rules`)
//! - Serve a **server-side-rendered HTML form** that works with
//!   **zero JavaScript**: operators type the current conditions, submit, and
//!   get the recommended setting back on the same page
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses (JSON or HTML)
//!
//! ## Dependency rule
//! Depends on `aircon-app` (for the climate service) and `aircon-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;
