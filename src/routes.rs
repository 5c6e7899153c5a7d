//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`   - Short link redirect
//! - `GET  /healthz`  - Liveness probe
//! - `/api/*`         - REST API (CORS enabled)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Fixed cross-origin policy on `/api`
//! - **Rate limiting** - Optional per-IP token bucket on `/api`
//!
//! Trailing-slash normalisation wraps the whole router in
//! [`crate::server::run`].

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{cors, rate_limit, tracing};
use crate::state::AppState;
use anyhow::Result;
use axum::Router;
use axum::routing::get;

/// Per-IP rate limit applied to `/api` routes.
#[derive(Debug, Clone, Copy)]
pub struct RateLimit {
    pub period_seconds: u64,
    pub burst: u32,
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `rate_limit` - when set, `/api` requests are limited per peer IP; the
///   router must then be served with connect info
///
/// # Errors
///
/// Returns an error if the rate limit settings are zero.
pub fn app_router(state: AppState, rate_limit: Option<RateLimit>) -> Result<Router> {
    let mut api_router = api::routes::routes();
    if let Some(limit) = rate_limit {
        api_router = api_router.layer(rate_limit::layer(limit.period_seconds, limit.burst)?);
    }
    let api_router = api_router.layer(cors::layer());

    let router = Router::new()
        .route("/healthz", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer());

    Ok(router)
}
