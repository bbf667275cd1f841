//! Common line coding traits and the technique selector

use crate::bipolar::{Ami, Pseudoternary};
use crate::manchester::{DifferentialManchester, Manchester};
use crate::nrz::{NrzI, NrzL};
use crate::rz::Rz;
use crate::{LineCodeError, Result};
use bitline_core::BitString;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Positive signal level
pub const HIGH: i8 = 1;
/// Zero signal level
pub const ZERO: i8 = 0;
/// Negative signal level
pub const LOW: i8 = -1;

/// Generic line encoder trait
pub trait LineEncoder {
    /// Technique implemented by this encoder
    fn technique(&self) -> Technique;

    /// Signal samples emitted per input bit
    fn samples_per_bit(&self) -> usize {
        self.technique().samples_per_bit()
    }

    /// Map bits to signal levels, left to right
    fn encode_levels(&self, bits: &BitString) -> Vec<i8>;
}

/// Line coding technique
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Technique {
    #[serde(rename = "NRZ-L")]
    NrzL,
    #[serde(rename = "NRZ-I")]
    NrzI,
    #[serde(rename = "RZ")]
    Rz,
    #[serde(rename = "Manchester")]
    Manchester,
    #[serde(rename = "Differential Manchester")]
    DifferentialManchester,
    #[serde(rename = "AMI")]
    Ami,
    #[serde(rename = "Pseudoternary")]
    Pseudoternary,
}

impl Technique {
    /// All techniques, in display order
    pub const ALL: [Technique; 7] = [
        Technique::NrzL,
        Technique::NrzI,
        Technique::Rz,
        Technique::Manchester,
        Technique::DifferentialManchester,
        Technique::Ami,
        Technique::Pseudoternary,
    ];

    /// Canonical display name
    pub fn name(&self) -> &'static str {
        match self {
            Technique::NrzL => "NRZ-L",
            Technique::NrzI => "NRZ-I",
            Technique::Rz => "RZ",
            Technique::Manchester => "Manchester",
            Technique::DifferentialManchester => "Differential Manchester",
            Technique::Ami => "AMI",
            Technique::Pseudoternary => "Pseudoternary",
        }
    }

    /// Signal samples emitted per input bit
    pub fn samples_per_bit(&self) -> usize {
        match self {
            Technique::Rz | Technique::Manchester | Technique::DifferentialManchester => 2,
            Technique::NrzL | Technique::NrzI | Technique::Ami | Technique::Pseudoternary => 1,
        }
    }

    /// Encoder implementing this technique
    pub fn encoder(&self) -> Box<dyn LineEncoder> {
        match self {
            Technique::NrzL => Box::new(NrzL),
            Technique::NrzI => Box::new(NrzI),
            Technique::Rz => Box::new(Rz),
            Technique::Manchester => Box::new(Manchester),
            Technique::DifferentialManchester => Box::new(DifferentialManchester),
            Technique::Ami => Box::new(Ami),
            Technique::Pseudoternary => Box::new(Pseudoternary),
        }
    }
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Technique {
    type Err = LineCodeError;

    fn from_str(s: &str) -> Result<Self> {
        // "Differential Manchester", "differential-manchester" and
        // "DIFFERENTIAL_MANCHESTER" all normalise to the same key
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "nrzl" => Ok(Technique::NrzL),
            "nrzi" => Ok(Technique::NrzI),
            "rz" => Ok(Technique::Rz),
            "manchester" => Ok(Technique::Manchester),
            "differentialmanchester" | "diffmanchester" => Ok(Technique::DifferentialManchester),
            "ami" => Ok(Technique::Ami),
            "pseudoternary" => Ok(Technique::Pseudoternary),
            _ => Err(LineCodeError::UnsupportedTechnique {
                name: s.to_string(),
            }),
        }
    }
}

/// Invert a running level
pub(crate) fn invert(level: i8) -> i8 {
    -level
}
