//! Error types for bitline line coding

use thiserror::Error;

/// Line coding error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineCodeError {
    #[error("Unsupported line coding technique: {name}")]
    UnsupportedTechnique { name: String },

    #[error("Core error: {0}")]
    Core(#[from] bitline_core::CoreError),
}

/// Result type for bitline line coding operations
pub type Result<T> = std::result::Result<T, LineCodeError>;
