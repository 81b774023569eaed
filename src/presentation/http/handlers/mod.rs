//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod catalog;
pub mod enrollment;
pub mod health;

use crate::application::services::CatalogError;
use crate::shared::error::AppError;

/// Map catalog service errors onto HTTP-facing application errors.
///
/// Storage failures keep their 503 shape; they must not read as 404 or as
/// an empty catalog.
pub(crate) fn map_catalog_error(err: CatalogError) -> AppError {
    match err {
        CatalogError::NotFound => AppError::NotFound("Course not found".into()),
        CatalogError::Malformed(msg) => AppError::MalformedRecord(msg),
        CatalogError::Validation(msg) => AppError::Validation(msg),
        CatalogError::Storage(msg) => AppError::Unavailable(msg),
    }
}
