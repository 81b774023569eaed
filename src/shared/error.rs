//! Application Error Types
//!
//! Centralized error handling with Axum integration.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A stored record is missing a required scalar (id, title) and cannot
    /// be assembled into a view value.
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Transient dependency failure surfaced by a lower layer.
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, 20001, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, 20002, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, 20004, msg.clone()),
            AppError::MalformedRecord(msg) => {
                tracing::warn!("Malformed record: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    20005,
                    "Stored record is malformed".into(),
                )
            }
            AppError::Unavailable(msg) => {
                tracing::error!("Dependency unavailable: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    20006,
                    "Storage temporarily unavailable".into(),
                )
            }
            // Transient storage failure: 503 with its own code, so callers
            // can tell "storage is down" apart from "no rows matched".
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    20006,
                    "Storage temporarily unavailable".into(),
                )
            }
        };

        let body = ErrorResponse { code, message };

        (status, Json(body)).into_response()
    }
}
