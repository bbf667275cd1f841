//! bitline engine
//!
//! The entry points the visualiser UI calls: line coding of a user bit
//! string, and the protect / inject / check round of error control.

pub mod engine;
pub mod config;
pub mod logging;
pub mod error;

pub use config::EngineConfig;
pub use engine::{EncodeRequest, EncodeResponse, Engine, ErrorControlReport};
pub use error::{EngineError, Result};
pub use logging::init_logging;

pub use bitline_frame::{DecodeResult, ErrorControlMethod};
pub use bitline_linecode::Technique;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        config::EngineConfig,
        engine::{EncodeRequest, EncodeResponse, Engine, ErrorControlReport},
        error::{EngineError, Result},
        DecodeResult, ErrorControlMethod, Technique,
    };
    pub use bitline_core::{BitString, SignalSample, Waveform};
}
