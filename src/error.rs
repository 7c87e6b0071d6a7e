//! # API Errors
//!
//! Error taxonomy for the localization API:
//! validation / not-found / business-rule / internal.
//!
//! Internal errors are logged with detail and reported to callers as an
//! opaque failure; the other categories surface their message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Localization API errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Malformed, missing, or out-of-range input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Referenced translation key or translation does not exist
    #[error("{0}")]
    NotFound(String),

    /// Request is well-formed but violates a business rule
    /// (empty bulk-update mapping, uniqueness violation at write time)
    #[error("{0}")]
    BusinessRule(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store connectivity failure or unexpected store error
    #[error("Internal server error")]
    Internal(#[source] sqlx::Error),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BusinessRule(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                ApiError::BusinessRule(format!("Uniqueness constraint violated: {}", db.message()))
            }
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                ApiError::BusinessRule("Referenced translation key does not exist".to_string())
            }
            sqlx::Error::RowNotFound => ApiError::NotFound("Resource not found".to_string()),
            _ => ApiError::Internal(err),
        }
    }
}

/// JSON error body returned for every failed request
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Raw store error text never leaves the process.
        if let ApiError::Internal(ref source) = self {
            tracing::error!(error = %source, "internal store error");
        }

        let body = ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}
