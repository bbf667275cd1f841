//! Single-bit fault injection

use crate::fec::{DecodeResult, ErrorControl, ErrorControlMethod};
use crate::hamming::hamming_extract;
use crate::Result;
use bitline_core::BitString;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

/// A frame with exactly one bit flipped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorruptedFrame {
    pub bits: BitString,
    /// 0-based index of the flipped bit
    pub position: usize,
}

/// Flip the bit at `position`
pub fn flip_at(frame: &BitString, position: usize) -> Result<CorruptedFrame> {
    Ok(CorruptedFrame {
        bits: frame.flip(position)?,
        position,
    })
}

/// Flip one bit chosen uniformly from `rng`
pub fn inject_single_bit_error<R>(frame: &BitString, rng: &mut R) -> Result<CorruptedFrame>
where
    R: Rng + ?Sized,
{
    let position = rng.gen_range(0..frame.len());
    info!("Injecting bit error at position {} of {}", position, frame.len());
    flip_at(frame, position)
}

/// Outcome counts from repeated fault injection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorStats {
    pub trials: usize,
    pub corrected_errors: usize,
    pub detected_errors: usize,
    pub undetected_errors: usize,
}

impl ErrorStats {
    /// True when no injected error slipped through
    pub fn all_caught(&self) -> bool {
        self.undetected_errors == 0 && self.corrected_errors + self.detected_errors == self.trials
    }
}

/// Encode `data`, then `trials` times inject one error and decode
pub fn exercise<R>(
    codec: &dyn ErrorControl,
    data: &BitString,
    trials: usize,
    rng: &mut R,
) -> Result<ErrorStats>
where
    R: Rng + ?Sized,
{
    let frame = codec.encode(data)?;
    let mut stats = ErrorStats::default();

    for _ in 0..trials {
        let corrupted = inject_single_bit_error(&frame, rng)?;
        stats.trials += 1;

        match codec.decode(&corrupted.bits)? {
            DecodeResult::DetectionFailure => stats.detected_errors += 1,
            DecodeResult::Recovered { bits, .. } => {
                let recovered = match codec.method() {
                    ErrorControlMethod::Hamming => hamming_extract(&bits)?,
                    ErrorControlMethod::Crc8 => bits,
                };
                if recovered == *data {
                    stats.corrected_errors += 1;
                } else {
                    stats.undetected_errors += 1;
                }
            }
        }
    }

    Ok(stats)
}
