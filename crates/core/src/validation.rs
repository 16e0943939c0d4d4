//! Presence checks for submitted form fields.
//!
//! Browsers submit empty inputs as empty strings, so "absent" and "blank"
//! are treated the same everywhere.

use crate::error::CoreError;

/// Require a field to be present and non-blank. The value is returned as
/// submitted; whitespace only matters for the blank check.
pub fn require_non_empty(field: &str, value: Option<&str>) -> Result<String, CoreError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.to_string()),
        _ => Err(CoreError::Validation(format!("'{field}' is required"))),
    }
}

/// Map blank optional text to `None`; anything else is kept verbatim.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse an optional integer field. Blank input is `None`; anything else
/// must parse as a base-10 integer.
pub fn optional_integer(field: &str, value: Option<&str>) -> Result<Option<i64>, CoreError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => v.parse::<i64>().map(Some).map_err(|_| {
            CoreError::Validation(format!("'{field}' must be a whole number, got '{v}'"))
        }),
    }
}
