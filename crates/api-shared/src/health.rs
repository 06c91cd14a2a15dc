use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Simple health service for the gallery APIs
///
/// This service provides a standardised way to check the health status of the gallery
/// service. It only reports liveness; it does not probe the gallery directory.
pub struct HealthService;

impl HealthService {
    /// Check health without creating an instance
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Gallery is alive".into(),
        }
    }
}
