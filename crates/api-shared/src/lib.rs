//! # API Shared
//!
//! Shared wire types and services for the ECOG presentation shells.
//!
//! Contains:
//! - JSON request/response types (`models` module) with OpenAPI schemas
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and `ecog-cli` so both shells emit the same JSON shape.

pub mod health;
pub mod models;

pub use health::HealthService;
pub use models::*;
