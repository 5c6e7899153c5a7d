//! Target URL validation.
//!
//! A target is accepted when it parses as an absolute URL with an `http` or
//! `https` scheme. The stored value is the string as submitted; no
//! normalization is applied and reachability is not checked.

use url::Url;

/// Errors that can occur during URL validation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Checks that `input` is an absolute HTTP(S) URL.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for malformed or relative URLs.
/// Returns [`UrlValidationError::UnsupportedProtocol`] for any other scheme
/// (`ftp:`, `javascript:`, `mailto:`, ...).
pub fn validate_target(input: &str) -> Result<(), UrlValidationError> {
    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(UrlValidationError::UnsupportedProtocol),
    }
}

/// Returns true if `input` is an absolute HTTP(S) URL.
pub fn is_valid_target(input: &str) -> bool {
    validate_target(input).is_ok()
}
