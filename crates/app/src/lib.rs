//! # aircon-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters implement:
//!   - `FactSource`: collects a fact snapshot from an operator or sensors
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ClimateService`: decide an action for a snapshot, list the rules
//! - Own the logging around decisions; the domain engine itself never logs
//!
//! ## Dependency rule
//! Depends on `aircon-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
