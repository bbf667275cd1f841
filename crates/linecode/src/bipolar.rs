//! Bipolar (three-level) codes

use crate::common::{invert, LineEncoder, Technique, HIGH, ZERO};
use bitline_core::BitString;

/// Emit zero for `idle` bits and alternate +1/-1 for the others,
/// starting at +1. Only marked bits advance the alternation.
fn alternate_marks(bits: &BitString, idle: bool) -> Vec<i8> {
    bits.iter()
        .scan(HIGH, |level, bit| {
            if bit == idle {
                return Some(ZERO);
            }
            let current = *level;
            *level = invert(current);
            Some(current)
        })
        .collect()
}

/// AMI: 0 is zero, 1 alternates polarity
#[derive(Debug, Clone, Copy, Default)]
pub struct Ami;

impl LineEncoder for Ami {
    fn technique(&self) -> Technique {
        Technique::Ami
    }

    fn encode_levels(&self, bits: &BitString) -> Vec<i8> {
        alternate_marks(bits, false)
    }
}

/// Pseudoternary: 1 is zero, 0 alternates polarity
#[derive(Debug, Clone, Copy, Default)]
pub struct Pseudoternary;

impl LineEncoder for Pseudoternary {
    fn technique(&self) -> Technique {
        Technique::Pseudoternary
    }

    fn encode_levels(&self, bits: &BitString) -> Vec<i8> {
        alternate_marks(bits, true)
    }
}
