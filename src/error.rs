//! Application error type and its HTTP mapping.
//!
//! Every error surfaced to a client is rendered as `{"error": "<message>"}`
//! JSON with the status code of its variant. Database errors are logged with
//! their source and surfaced as an opaque internal error.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Error taxonomy for the service.
///
/// - [`InvalidInput`](AppError::InvalidInput) - malformed URL, slug, or JSON body (400)
/// - [`NotFound`](AppError::NotFound) - unknown slug on redirect or stats (404)
/// - [`SlugConflict`](AppError::SlugConflict) - requested slug already taken (409)
/// - [`SlugGenerationFailed`](AppError::SlugGenerationFailed) - random slug retries exhausted (500)
/// - [`Internal`](AppError::Internal) - storage or infrastructure failure (500)
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    SlugConflict(String),

    #[error("Failed to generate unique slug. Please try again.")]
    SlugGenerationFailed,

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn slug_conflict(message: impl Into<String>) -> Self {
        Self::SlugConflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::SlugConflict(_) => StatusCode::CONFLICT,
            AppError::SlugGenerationFailed => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::slug_conflict("Slug already exists");
        }

        tracing::error!(error = %e, "database error");
        AppError::internal("Database error")
    }
}
