//! Error types for primitive parsing and conversion.

use thiserror::Error;

/// Errors raised while building primitive values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrimitiveError {
    /// Input does not have the shape the primitive requires
    #[error("Invalid format: {message}")]
    InvalidFormat {
        /// Error message describing the format issue
        message: String,
    },
}

impl PrimitiveError {
    /// Creates an [`PrimitiveError::InvalidFormat`] error.
    pub fn invalid_format<S: Into<String>>(message: S) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }
}

/// Result alias used throughout this crate.
pub type PrimitiveResult<T> = std::result::Result<T, PrimitiveError>;
