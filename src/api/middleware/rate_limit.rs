//! Rate limiting middleware using token bucket algorithm.

use anyhow::{Context, Result};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Creates a per-IP rate limiter for API endpoints.
///
/// Each client gets a bucket of `burst` tokens, refilled by one token every
/// `period_seconds`. Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the socket
/// peer address, so the router must be served with connect info.
///
/// # Errors
///
/// Returns an error if `period_seconds` or `burst` is zero.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/links", post(create_link_handler))
///     .layer(rate_limit::layer(2, 100)?);
/// ```
pub fn layer(
    period_seconds: u64,
    burst: u32,
) -> Result<GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(period_seconds)
            .burst_size(burst)
            .finish()
            .context("Rate limit period and burst must be greater than 0")?,
    );

    Ok(GovernorLayer::new(governor_conf))
}
