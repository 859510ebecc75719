use std::fmt;

/// Result type for safs operations
pub type Result<T> = std::result::Result<T, SafsError>;

/// Main error type for the safs library
#[derive(Debug, Clone, PartialEq)]
pub enum SafsError {
    /// Input shape does not fit the operation
    DimensionMismatch {
        expected: String,
        actual: String,
    },

    /// Invalid parameter value
    InvalidParameter {
        name: String,
        reason: String,
    },

    /// Activation name that is not part of the catalogue
    UnknownActivation(String),

    /// Numerical computation errors
    NumericalError(String),
}

impl fmt::Display for SafsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SafsError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {}, got {}", expected, actual)
            }
            SafsError::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            SafsError::UnknownActivation(name) => write!(f, "Unknown activation type '{}'", name),
            SafsError::NumericalError(msg) => write!(f, "Numerical error: {}", msg),
        }
    }
}

impl std::error::Error for SafsError {}

// Helper functions for common error patterns
impl SafsError {
    pub fn dimension_mismatch<E: Into<String>, A: Into<String>>(expected: E, actual: A) -> Self {
        SafsError::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn invalid_parameter<N: Into<String>, R: Into<String>>(name: N, reason: R) -> Self {
        SafsError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
