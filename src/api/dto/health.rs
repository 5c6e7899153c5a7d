//! DTOs for health check endpoint.

use serde::Serialize;

/// Version reported by the health endpoint.
pub const API_VERSION: &str = "1.0";

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub version: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            ok: true,
            version: API_VERSION,
        }
    }
}
