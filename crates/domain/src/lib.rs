//! # aircon-domain
//!
//! Pure domain model for the aircon air-conditioner controller.
//!
//! ## Responsibilities
//! - Define the **fact snapshot** (temperature, humidity, occupancy, …) and
//!   the validation boundary that turns untrusted input into typed facts
//! - Define **actions** (mode, fan speed, setpoint, reason)
//! - Define **rules** (name, priority, predicate, action) and the ordered
//!   **rule catalog**, including the built-in catalog
//! - Provide the **rule engine** that selects exactly one rule per snapshot
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and performs no IO or logging.
//! Evaluation is a pure function of the catalog and the facts.

pub mod error;

pub mod action;
pub mod catalog;
pub mod engine;
pub mod evaluation;
pub mod fact;
pub mod predicate;
pub mod rule;
