//! Error types for bitline core

use thiserror::Error;

/// Core error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid input: {msg}")]
    InvalidInput { msg: String },

    #[error("Bit index out of range: index {index}, length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl CoreError {
    /// Shorthand for an `InvalidInput` error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        CoreError::InvalidInput { msg: msg.into() }
    }
}

/// Result type for bitline core operations
pub type Result<T> = std::result::Result<T, CoreError>;
