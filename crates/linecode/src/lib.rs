//! bitline line coding
//!
//! Maps bit strings onto physical-layer signal levels. Each coding family
//! lives in its own module behind the [`common::LineEncoder`] trait; the
//! free functions here pick an encoder from a [`Technique`] tag.

pub mod nrz;
pub mod rz;
pub mod manchester;
pub mod bipolar;
pub mod common;
pub mod error;

pub use common::{LineEncoder, Technique};
pub use error::{LineCodeError, Result};

use bitline_core::{BitString, Waveform};

/// Encode `bits` with the given technique
pub fn encode(bits: &BitString, technique: Technique) -> Waveform {
    let encoder = technique.encoder();
    let waveform = Waveform::from_levels(encoder.encode_levels(bits));

    tracing::debug!(
        "{} encoded {} bits into {} samples",
        technique,
        bits.len(),
        waveform.len()
    );

    waveform
}

/// Validate a textual bit string, then encode it
pub fn encode_str(bits: &str, technique: Technique) -> Result<Waveform> {
    let bits = BitString::parse(bits)?;
    Ok(encode(&bits, technique))
}

/// Sum of all levels; zero for a DC-balanced waveform
pub fn dc_balance(waveform: &Waveform) -> i64 {
    waveform.samples().iter().map(|s| s.level as i64).sum()
}

/// Number of level changes between consecutive samples
pub fn transitions(waveform: &Waveform) -> usize {
    waveform
        .samples()
        .windows(2)
        .filter(|pair| pair[0].level != pair[1].level)
        .count()
}

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        nrz::{NrzL, NrzI},
        rz::Rz,
        manchester::{Manchester, DifferentialManchester},
        bipolar::{Ami, Pseudoternary},
        common::{LineEncoder, Technique},
        error::{LineCodeError, Result},
        encode, encode_str,
    };
}
