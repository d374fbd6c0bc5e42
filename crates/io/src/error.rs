use thiserror::Error;

/// Errors produced while reading or writing binary data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IoError {
    /// The reader ran out of input
    #[error("Unexpected end of data: needed {needed} bytes, {available} available")]
    EndOfStream {
        /// Bytes the read required
        needed: usize,
        /// Bytes left in the input
        available: usize,
    },

    /// Structurally invalid input
    #[error("Format error: {message}")]
    Format {
        /// Error message describing the format issue
        message: String,
    },

    /// Bytes were not valid strict UTF-8
    #[error("Invalid UTF-8 data")]
    InvalidUtf8,

    /// A decoded value was outside its allowed range
    #[error("Invalid {context}: {value}")]
    InvalidData {
        /// What was being decoded
        context: &'static str,
        /// The offending value
        value: String,
    },
}

impl IoError {
    /// Creates an [`IoError::Format`] error.
    pub fn format<S: Into<String>>(message: S) -> Self {
        Self::Format {
            message: message.into(),
        }
    }
}

/// Result alias for IO operations.
pub type IoResult<T> = Result<T, IoError>;
