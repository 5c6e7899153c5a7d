//! Handlers for link management endpoints (create, list, get, delete).

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::api::dto::link::{CreateLinkRequest, LinkResponse, OkResponse};
use crate::api::dto::pagination::ListLinksParams;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "target": "https://example.com",
///   "code": "custom1"   // optional, 6-8 letters or digits
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "code": "custom1",
///   "target": "https://example.com",
///   "total_clicks": 0,
///   "last_clicked": null,
///   "created_at": "2025-01-01T12:00:00.000Z"
/// }
/// ```
///
/// # Errors
///
/// - 400 if the target is missing, not JSON-readable or not an HTTP(S) URL
/// - 400 if the custom code is malformed
/// - 409 if the custom code is taken
/// - 500 if no free code could be generated
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Unreadable create request body");
        AppError::InvalidTarget
    })?;

    let link = state
        .link_service
        .create_link(payload.target, payload.code)
        .await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Lists active links, newest first.
///
/// # Endpoint
///
/// `GET /api/links?q=&limit=&offset=`
///
/// - `q` - case-sensitive substring of the code or target
/// - `limit` - page size, default 50, at most 100
/// - `offset` - rows to skip, default 0
pub async fn list_links_handler(
    State(state): State<AppState>,
    Query(params): Query<ListLinksParams>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_links(params.into_query()).await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}

/// Returns a single active link.
///
/// # Endpoint
///
/// `GET /api/links/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the link doesn't exist or was deleted.
pub async fn get_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_link(&code).await?;

    Ok(Json(link.into()))
}

/// Soft-deletes a short link.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// # Behavior
///
/// The row and its click counters are kept; the link stops resolving and its
/// code becomes available to new links.
///
/// # Errors
///
/// Returns 404 Not Found if the link doesn't exist or is already deleted.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<OkResponse>, AppError> {
    state.link_service.delete_link(&code).await?;

    Ok(Json(OkResponse::ok()))
}
