//! Short code generation and validation utilities.
//!
//! Codes are 6-8 ASCII letters or digits. Generated codes use the 62-character
//! alphanumeric alphabet with each character drawn independently, so they are
//! short and readable but not suitable as secrets.

use crate::error::AppError;
use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;
use std::sync::LazyLock;

/// Length of generated codes.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Compiled regex for code validation.
static CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{6,8}$").expect("code regex is valid"));

/// Generates a random alphanumeric code of [`DEFAULT_CODE_LENGTH`] characters.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(is_valid_code(&code));
/// ```
pub fn generate_code() -> String {
    generate_code_with_length(DEFAULT_CODE_LENGTH)
}

/// Generates a random alphanumeric code of `length` characters.
pub fn generate_code_with_length(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Returns true if `code` is 6-8 ASCII letters or digits.
pub fn is_valid_code(code: &str) -> bool {
    CODE_REGEX.is_match(code)
}

/// Validates a user-provided short code.
///
/// # Errors
///
/// Returns [`AppError::InvalidCodeFormat`] unless the code matches
/// `^[A-Za-z0-9]{6,8}$`.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_code("custom1").is_ok());
/// assert!(validate_code("ab").is_err());          // Too short
/// assert!(validate_code("my-link").is_err());     // Hyphen
/// ```
pub fn validate_code(code: &str) -> Result<(), AppError> {
    if is_valid_code(code) {
        Ok(())
    } else {
        Err(AppError::InvalidCodeFormat)
    }
}
