//! Required-field checks for incoming requests.

use crate::error::CoreError;

/// Ensure a required text field is present and not blank.
///
/// Returns the trimmed value so callers can use it directly.
pub fn require_text<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str, CoreError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CoreError::Validation(format!("{field} is required"))),
    }
}
