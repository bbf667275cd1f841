//! Return-to-zero code

use crate::common::{LineEncoder, Technique, HIGH, LOW, ZERO};
use bitline_core::BitString;

/// RZ: the bit level for the first half, zero for the second
#[derive(Debug, Clone, Copy, Default)]
pub struct Rz;

impl LineEncoder for Rz {
    fn technique(&self) -> Technique {
        Technique::Rz
    }

    fn encode_levels(&self, bits: &BitString) -> Vec<i8> {
        bits.iter()
            .flat_map(|bit| [if bit { HIGH } else { LOW }, ZERO])
            .collect()
    }
}
