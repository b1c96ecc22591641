//! Application services (use-cases).

pub mod climate_service;
