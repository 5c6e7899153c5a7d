//! Cross-origin policy for the REST API.

use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Creates the CORS layer applied to every `/api` route.
///
/// The policy is fixed: any origin, methods `GET, POST, PUT, DELETE, OPTIONS`
/// and headers `Content-Type, Authorization`. `OPTIONS` requests are answered
/// by the layer itself with `200 OK`.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
