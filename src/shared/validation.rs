//! Validation Utilities

use validator::ValidationErrors;

use super::error::AppError;

/// Flatten `validator` derive output into a single validation error.
///
/// The catalog API only validates required-scalar presence, so reporting
/// the first failing field is enough for the caller to act on.
pub fn validation_error(errors: ValidationErrors) -> AppError {
    let message = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let detail = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "invalid value".into());
                format!("{}: {}", field, detail)
            })
        })
        .next()
        .unwrap_or_else(|| "Validation failed".into());

    AppError::Validation(message)
}
