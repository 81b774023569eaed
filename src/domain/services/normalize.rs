//! Record field normalization.
//!
//! Raw records arrive with any optional scalar possibly NULL. Optional
//! fields normalize to safe defaults; only a missing required scalar turns
//! into a malformed-record error, which fails the whole build closed.

use crate::shared::error::AppError;

/// Extract a required text scalar. Absent or blank values make the record
/// malformed.
pub fn required_text(
    value: Option<&str>,
    field: &str,
    record_id: i64,
) -> Result<String, AppError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(AppError::MalformedRecord(format!(
            "record {} is missing required field '{}'",
            record_id, field
        ))),
    }
}

/// Normalize an optional text scalar to a trimmed string, empty when absent.
pub fn text_or_empty(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

/// Normalize an optional numeric scalar to 0.0 when absent.
pub fn number_or_zero(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0)
}
