//! Error types for portfolio analytics.
//!
//! Empty input, a zero total value and a zero average cost are boundary
//! cases with defined fallbacks, not errors.

use thiserror::Error;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur during portfolio operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortfolioError {
    /// A holding carries a value outside its domain (e.g. negative quantity).
    #[error("Invalid input for holding '{id}': {reason}")]
    InvalidInput {
        /// The holding ID.
        id: String,
        /// The reason the input is invalid.
        reason: String,
    },

    /// Missing required field during construction.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },
}

impl PortfolioError {
    /// Create an invalid input error.
    #[must_use]
    pub fn invalid_input(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Create a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Returns true for [`PortfolioError::InvalidInput`].
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}
