//! Application error type and its HTTP mapping.
//!
//! Every failure a caller can observe is one of a fixed set of kinds, each with
//! a fixed status code and message. Responses carry only the message:
//!
//! ```json
//! { "error": "Code already exists" }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Name of the partial unique index guarding active codes.
pub const ACTIVE_CODE_CONSTRAINT: &str = "links_active_code_key";

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid URL. Use http:// or https://")]
    InvalidTarget,

    #[error("Code must be 6–8 alphanumeric characters")]
    InvalidCodeFormat,

    #[error("Code already exists")]
    CodeConflict,

    #[error("Could not generate unique code, try again")]
    GenerationExhausted,

    #[error("Not found")]
    NotFound,

    #[error("Internal server error")]
    Database(#[source] sqlx::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidTarget | AppError::InvalidCodeFormat => StatusCode::BAD_REQUEST,
            AppError::CodeConflict => StatusCode::CONFLICT,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::GenerationExhausted | AppError::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Database(ref e) = self {
            tracing::error!(error = %e, "Database error");
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
            && db.constraint() == Some(ACTIVE_CODE_CONSTRAINT)
        {
            return AppError::CodeConflict;
        }

        AppError::Database(e)
    }
}
