//! API route configuration.
//!
//! The API is public; cross-origin access and optional rate limiting are
//! layered on in [`crate::routes::app_router`].

use crate::api::handlers::{
    create_link_handler, delete_link_handler, get_link_handler, health_handler,
    list_links_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All routes mounted under `/api`.
///
/// # Endpoints
///
/// - `POST   /links`         - Create a short link
/// - `GET    /links`         - List active links (search + pagination)
/// - `GET    /links/{code}`  - Fetch a single active link
/// - `DELETE /links/{code}`  - Soft-delete a link
/// - `GET    /healthz`       - Liveness probe
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route(
            "/links/{code}",
            get(get_link_handler).delete(delete_link_handler),
        )
        .route("/healthz", get(health_handler))
}
