//! Error types for bitline frame

use thiserror::Error;

/// Error-control error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    #[error("Unsupported error control method: {name}")]
    UnsupportedMethod { name: String },

    #[error("Frame too short: {len} bits, need at least {min}")]
    FrameTooShort { len: usize, min: usize },

    #[error("FEC decoding failed: {msg}")]
    FecDecodingFailed { msg: String },

    #[error("Core error: {0}")]
    Core(#[from] bitline_core::CoreError),
}

/// Result type for bitline frame operations
pub type Result<T> = std::result::Result<T, FrameError>;
