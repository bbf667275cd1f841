//! bitline core - bit strings and waveforms
//!
//! This crate provides the validated bit sequence type shared by the
//! line coder and the error-control codecs, plus the signal sample and
//! waveform types the line coder produces.

pub mod bits;
pub mod waveform;
pub mod error;

pub use bits::BitString;
pub use error::{CoreError, Result};
pub use waveform::{SignalSample, Waveform};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        bits::BitString,
        waveform::{SignalSample, Waveform},
        error::{CoreError, Result},
    };
}
