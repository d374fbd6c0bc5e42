//! Error types for the VM value model.

use thiserror::Error;

/// VM value-model errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VmError {
    /// A stack item could not be viewed as the requested type
    #[error("Invalid type: {message}")]
    InvalidType {
        /// Error message describing the conversion
        message: String,
    },

    /// Engine limits could not be loaded
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message describing the configuration issue
        message: String,
    },
}

impl VmError {
    /// Creates an [`VmError::InvalidType`] error.
    pub fn invalid_type_simple<S: Into<String>>(message: S) -> Self {
        Self::InvalidType {
            message: message.into(),
        }
    }

    /// Creates an [`VmError::Configuration`] error.
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Result alias for VM operations.
pub type VmResult<T> = Result<T, VmError>;
