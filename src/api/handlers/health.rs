//! Handler for health check endpoint.

use axum::Json;

use crate::api::dto::health::HealthResponse;

/// Reports that the service is up.
///
/// # Endpoint
///
/// `GET /healthz` (also mounted at `GET /api/healthz`)
///
/// # Response
///
/// ```json
/// { "ok": true, "version": "1.0" }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
