//! Non-return-to-zero codes

use crate::common::{invert, LineEncoder, Technique, HIGH, LOW};
use bitline_core::BitString;

/// NRZ-L: the level is the bit value
#[derive(Debug, Clone, Copy, Default)]
pub struct NrzL;

impl LineEncoder for NrzL {
    fn technique(&self) -> Technique {
        Technique::NrzL
    }

    fn encode_levels(&self, bits: &BitString) -> Vec<i8> {
        bits.iter().map(|bit| if bit { HIGH } else { LOW }).collect()
    }
}

/// NRZ-I: a 1 inverts the line, a 0 holds it
#[derive(Debug, Clone, Copy, Default)]
pub struct NrzI;

impl LineEncoder for NrzI {
    fn technique(&self) -> Technique {
        Technique::NrzI
    }

    fn encode_levels(&self, bits: &BitString) -> Vec<i8> {
        bits.iter()
            .scan(HIGH, |level, bit| {
                if bit {
                    *level = invert(*level);
                }
                Some(*level)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(s: &str) -> BitString {
        BitString::parse(s).unwrap()
    }

    #[test]
    fn test_nrz_l() {
        assert_eq!(NrzL.encode_levels(&bits("1001")), vec![1, -1, -1, 1]);
    }

    #[test]
    fn test_nrz_i_starts_high() {
        assert_eq!(NrzI.encode_levels(&bits("000")), vec![1, 1, 1]);
        assert_eq!(NrzI.encode_levels(&bits("1011")), vec![-1, -1, 1, -1]);
    }

    #[test]
    fn test_nrz_i_is_stateless_between_calls() {
        let first = NrzI.encode_levels(&bits("1"));
        let second = NrzI.encode_levels(&bits("1"));
        assert_eq!(first, second);
    }
}
