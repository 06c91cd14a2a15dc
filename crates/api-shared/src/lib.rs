//! # API Shared
//!
//! Shared utilities and definitions for the gallery APIs.
//!
//! Contains:
//! - Response types shared by the REST API and its OpenAPI document
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and the `gallery-run` binary.

pub mod health;

pub use gallery_types::ImageDetails;
pub use health::{HealthRes, HealthService};
