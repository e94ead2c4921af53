//! Error types for zernike

use thiserror::Error;

/// Result type alias using [`ZernikeError`]
pub type Result<T> = std::result::Result<T, ZernikeError>;

/// Errors raised while validating indices, degree pairs or sample arrays.
///
/// Every variant belongs to the invalid-input category: nothing here is
/// retryable and no operation returns a partial result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZernikeError {
    /// A scalar argument violates its domain (non-positive Noll index,
    /// odd `n - m`, `|m| > n`, empty selector, ...)
    #[error("Invalid input '{arg}': {reason}")]
    InvalidInput {
        /// The offending argument
        arg: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// Two arrays that must be paired element-wise disagree in shape
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Shape of the reference array
        expected: Vec<usize>,
        /// Shape of the array that did not match
        got: Vec<usize>,
    },

    /// Sample arrays have more dimensions than supported
    #[error("Sample arrays have {ndim} dimensions, at most {max} are supported")]
    TooManyDimensions {
        /// Dimensions of the supplied array
        ndim: usize,
        /// Supported maximum
        max: usize,
    },
}

impl ZernikeError {
    pub(crate) fn invalid(arg: &'static str, reason: impl Into<String>) -> Self {
        ZernikeError::InvalidInput {
            arg,
            reason: reason.into(),
        }
    }

    /// All variants are input errors; kept as a predicate so callers can
    /// match the invalid-input category without naming each variant.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            ZernikeError::InvalidInput { .. }
                | ZernikeError::ShapeMismatch { .. }
                | ZernikeError::TooManyDimensions { .. }
        )
    }
}
