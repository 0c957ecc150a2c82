//! Field code validation.

use crate::error::{FilterError, Result};

/// Characters that may not appear in a field code.
///
/// Includes the full-width bracket variants and the ASCII space.
pub const DISALLOWED_FIELD_CHARS: [char; 14] = [
    '(', ')', '（', '）', '「', '」', '[', ']', '【', '】', '{', '}', '"', ' ',
];

/// Checks that `field` contains none of [`DISALLOWED_FIELD_CHARS`].
///
/// Returns the first offending character in the error.
pub fn validate_field(field: &str) -> Result<()> {
    match field.chars().find(|c| DISALLOWED_FIELD_CHARS.contains(c)) {
        Some(found) => Err(FilterError::InvalidField {
            field: field.to_string(),
            found,
        }),
        None => Ok(()),
    }
}
