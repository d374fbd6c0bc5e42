//! Error types for the smart contract crate.

use neo_io::IoError;
use neo_vm::StackItemType;
use thiserror::Error;

/// Smart contract module errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    /// Text was not valid under strict UTF-8
    #[error("Encoding error: {message}")]
    Encoding {
        /// Error message describing the encoding issue
        message: String,
    },

    /// An item count, size or nesting bound was exceeded
    #[error("Limit exceeded: {message}")]
    LimitExceeded {
        /// Error message naming the limit
        message: String,
    },

    /// A stack item of this type cannot be serialized
    #[error("Unsupported stack item type: {item_type:?}")]
    UnsupportedType {
        /// The offending type
        item_type: StackItemType,
    },

    /// The caller requested an operation this type never supports
    #[error("Unsupported operation: {message}")]
    UnsupportedOperation {
        /// Error message describing the operation
        message: String,
    },

    /// Serialized data was malformed
    #[error("Deserialization error: {message}")]
    Deserialization {
        /// Error message describing the data issue
        message: String,
    },

    /// Reading serialized data failed
    #[error(transparent)]
    Io(#[from] IoError),
}

impl ContractError {
    pub fn encoding<S: Into<String>>(message: S) -> Self {
        Self::Encoding {
            message: message.into(),
        }
    }

    pub fn limit_exceeded<S: Into<String>>(message: S) -> Self {
        Self::LimitExceeded {
            message: message.into(),
        }
    }

    pub fn unsupported_type(item_type: StackItemType) -> Self {
        Self::UnsupportedType { item_type }
    }

    pub fn unsupported_operation<S: Into<String>>(message: S) -> Self {
        Self::UnsupportedOperation {
            message: message.into(),
        }
    }

    pub fn deserialization<S: Into<String>>(message: S) -> Self {
        Self::Deserialization {
            message: message.into(),
        }
    }
}

/// Result alias for this crate.
pub type ContractResult<T> = Result<T, ContractError>;
