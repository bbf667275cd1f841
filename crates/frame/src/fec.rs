//! Error-control codec traits and method selection

use crate::crc::Crc8;
use crate::hamming::Hamming;
use crate::{FrameError, Result};
use bitline_core::BitString;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Generic error-control codec trait
pub trait ErrorControl {
    /// Method implemented by this codec
    fn method(&self) -> ErrorControlMethod;

    /// Add redundancy to `data`
    fn encode(&self, data: &BitString) -> Result<BitString>;

    /// Check a received frame, correcting it where the code allows
    fn decode(&self, frame: &BitString) -> Result<DecodeResult>;

    /// Redundancy bits added for `data_len` data bits
    fn redundancy_bits(&self, data_len: usize) -> usize;

    /// Get the code rate (k/n where k is data bits, n is total bits)
    fn code_rate(&self, data_len: usize) -> f64 {
        let total = data_len + self.redundancy_bits(data_len);
        if total == 0 {
            return 0.0;
        }
        data_len as f64 / total as f64
    }
}

/// Outcome of checking a received frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DecodeResult {
    /// Frame accepted. For Hamming this is the full corrected frame and
    /// `corrected` holds the 0-based index of the repaired bit; for CRC-8
    /// it is the data portion of a frame whose checksum matched.
    Recovered {
        bits: BitString,
        corrected: Option<usize>,
    },
    /// Checksum mismatch; the code cannot locate the error
    DetectionFailure,
}

impl DecodeResult {
    /// Recovered bits, if any
    pub fn bits(&self) -> Option<&BitString> {
        match self {
            DecodeResult::Recovered { bits, .. } => Some(bits),
            DecodeResult::DetectionFailure => None,
        }
    }

    pub fn is_detection_failure(&self) -> bool {
        matches!(self, DecodeResult::DetectionFailure)
    }
}

impl fmt::Display for DecodeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeResult::Recovered { bits, .. } => write!(f, "{}", bits),
            DecodeResult::DetectionFailure => f.write_str("Error detected"),
        }
    }
}

/// Error-control method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorControlMethod {
    #[serde(rename = "Hamming Code")]
    Hamming,
    #[serde(rename = "CRC-8")]
    Crc8,
}

impl ErrorControlMethod {
    pub const ALL: [ErrorControlMethod; 2] = [ErrorControlMethod::Hamming, ErrorControlMethod::Crc8];

    /// Canonical display name
    pub fn name(&self) -> &'static str {
        match self {
            ErrorControlMethod::Hamming => "Hamming Code",
            ErrorControlMethod::Crc8 => "CRC-8",
        }
    }

    /// Codec implementing this method
    pub fn codec(&self) -> Box<dyn ErrorControl> {
        match self {
            ErrorControlMethod::Hamming => Box::new(Hamming),
            ErrorControlMethod::Crc8 => Box::new(Crc8::default()),
        }
    }
}

impl fmt::Display for ErrorControlMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ErrorControlMethod {
    type Err = FrameError;

    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "hamming" | "hammingcode" => Ok(ErrorControlMethod::Hamming),
            "crc8" => Ok(ErrorControlMethod::Crc8),
            _ => Err(FrameError::UnsupportedMethod {
                name: s.to_string(),
            }),
        }
    }
}
