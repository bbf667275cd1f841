//! bitline frame - error detection and correction
//!
//! This crate adds redundancy to bit strings (Hamming single-error
//! correction, CRC-8 detection), checks received frames, and injects
//! single-bit faults to exercise both paths.

pub mod fec;
pub mod hamming;
pub mod crc;
pub mod inject;
pub mod error;

pub use error::{FrameError, Result};
pub use fec::{DecodeResult, ErrorControl, ErrorControlMethod};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        fec::{DecodeResult, ErrorControl, ErrorControlMethod},
        hamming::{hamming_correct, hamming_encode, hamming_extract, Hamming},
        crc::{crc8_detect, crc8_encode, Crc8},
        inject::{exercise, inject_single_bit_error, CorruptedFrame, ErrorStats},
        error::{FrameError, Result},
    };
}
