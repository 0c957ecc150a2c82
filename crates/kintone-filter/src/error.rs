//! Error types for the filter builder.

use std::convert::Infallible;

use thiserror::Error;

/// Errors raised while composing a filter expression.
///
/// Every variant is reported at the call that caused it; nothing is
/// deferred to serialization time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// Field code contains a character reserved by the query grammar.
    #[error("invalid field '{field}': character '{found}' is not allowed")]
    InvalidField { field: String, found: char },

    /// Operator is not one of the allowed tokens.
    #[error("invalid operator '{0}'")]
    InvalidOperator(String),

    /// Value shape is not accepted in this position.
    #[error("invalid value type: expected {expected}, got {actual}")]
    InvalidValueType { expected: String, actual: String },

    /// Condition target is neither a field code nor an expression.
    #[error("invalid argument: expected a field code or an expression, got {actual}")]
    InvalidArgument { actual: String },
}

impl FilterError {
    /// Create a value type error.
    pub fn value_type(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::InvalidValueType {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create an argument error.
    pub fn argument(actual: impl Into<String>) -> Self {
        Self::InvalidArgument {
            actual: actual.into(),
        }
    }
}

impl From<Infallible> for FilterError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Result type for filter operations.
pub type Result<T> = std::result::Result<T, FilterError>;
