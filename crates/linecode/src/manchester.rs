//! Biphase codes

use crate::common::{invert, LineEncoder, Technique, HIGH, LOW};
use bitline_core::BitString;

/// Manchester: 1 is high-to-low, 0 is low-to-high
#[derive(Debug, Clone, Copy, Default)]
pub struct Manchester;

impl LineEncoder for Manchester {
    fn technique(&self) -> Technique {
        Technique::Manchester
    }

    fn encode_levels(&self, bits: &BitString) -> Vec<i8> {
        bits.iter()
            .flat_map(|bit| if bit { [HIGH, LOW] } else { [LOW, HIGH] })
            .collect()
    }
}

/// Differential Manchester.
///
/// The running level starts high. A 1 emits `[-level, level]` and keeps the
/// running level; a 0 emits `[level, -level]` and then inverts it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DifferentialManchester;

impl LineEncoder for DifferentialManchester {
    fn technique(&self) -> Technique {
        Technique::DifferentialManchester
    }

    fn encode_levels(&self, bits: &BitString) -> Vec<i8> {
        bits.iter()
            .scan(HIGH, |level, bit| {
                let current = *level;
                if bit {
                    Some([invert(current), current])
                } else {
                    *level = invert(current);
                    Some([current, invert(current)])
                }
            })
            .flatten()
            .collect()
    }
}
