//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Atomically increment the click counter of the active link
/// 2. Return `302 Found` with `Location: <target>`
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist or the link was deleted.
/// No click is recorded in that case.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let target = state.link_service.record_click(&code).await?;

    let location = location_header(&target).ok_or_else(|| {
        tracing::error!(
            code = %code,
            target = %target,
            "Stored target cannot be used as a Location header"
        );
        AppError::NotFound
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}

/// Builds the `Location` value, preferring the target exactly as stored and
/// falling back to its percent-encoded serialization.
fn location_header(target: &str) -> Option<HeaderValue> {
    HeaderValue::from_str(target).ok().or_else(|| {
        Url::parse(target)
            .ok()
            .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
    })
}
