//! Error types for the bitline engine

use bitline_core::CoreError;
use bitline_frame::FrameError;
use bitline_linecode::LineCodeError;
use thiserror::Error;

/// Engine error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Line coding error: {0}")]
    LineCode(#[from] LineCodeError),

    #[error("Error control error: {0}")]
    Frame(#[from] FrameError),

    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}

impl EngineError {
    /// True when the caller supplied a bad bit string and should be prompted
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            EngineError::Core(CoreError::InvalidInput { .. })
                | EngineError::LineCode(LineCodeError::Core(CoreError::InvalidInput { .. }))
                | EngineError::Frame(FrameError::Core(CoreError::InvalidInput { .. }))
        )
    }
}

/// Result type for bitline engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
