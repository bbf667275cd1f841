//! Hamming single-error-correcting code
//!
//! Parity bits sit at the 1-indexed power-of-two positions (1, 2, 4, 8, ...)
//! and data bits fill the remaining positions in order. The parity bit at
//! 0-indexed position `p = 2^i - 1` covers the blocks `[p, 2p]`, repeating
//! with stride `2(p + 1)`; every check uses even parity.

use crate::fec::{DecodeResult, ErrorControl, ErrorControlMethod};
use crate::{FrameError, Result};
use bitline_core::BitString;
use tracing::debug;

/// Minimal `m` with `2^m >= data_len + m + 1`
pub fn redundancy_bits(data_len: usize) -> usize {
    let mut m = 0;
    while (1usize << m) < data_len + m + 1 {
        m += 1;
    }
    m
}

/// True for 0-indexed positions holding a parity bit
pub fn is_parity_position(index: usize) -> bool {
    (index + 1).is_power_of_two()
}

/// Number of parity positions in a frame of `frame_len` bits
fn parity_count(frame_len: usize) -> usize {
    (usize::BITS - frame_len.leading_zeros()) as usize
}

/// XOR of every bit covered by the parity slot at `pos`
fn parity_over(bits: &[bool], pos: usize) -> bool {
    let stride = 2 * (pos + 1);
    (pos..bits.len())
        .step_by(stride)
        .flat_map(|block| block..(block + pos + 1).min(bits.len()))
        .fold(false, |parity, i| parity ^ bits[i])
}

/// Add Hamming parity to `data`
pub fn hamming_encode(data: &BitString) -> Result<BitString> {
    let m = redundancy_bits(data.len());
    let total = data.len() + m;

    let mut frame = vec![false; total];
    let mut data_bits = data.iter();
    for (i, slot) in frame.iter_mut().enumerate() {
        if !is_parity_position(i) {
            *slot = data_bits.next().unwrap_or(false);
        }
    }

    for i in 0..m {
        let pos = (1usize << i) - 1;
        // the slot is still clear, so including it does not change the sum
        frame[pos] = parity_over(&frame, pos);
    }

    Ok(BitString::from_bits(frame)?)
}

/// 1-indexed position of a single flipped bit, or 0 for a consistent frame
pub fn hamming_syndrome(frame: &BitString) -> usize {
    let bits = frame.as_slice();
    (0..parity_count(bits.len()))
        .map(|i| (1usize << i) - 1)
        .filter(|&pos| parity_over(bits, pos))
        .map(|pos| pos + 1)
        .sum()
}

/// Repair at most one flipped bit and return the full frame.
///
/// Two or more flipped bits are outside what the code can handle: the
/// syndrome then names an unrelated bit, or a position past the end of the
/// frame, which is reported as a decoding failure.
pub fn hamming_correct(frame: &BitString) -> Result<BitString> {
    Ok(correct_with_position(frame)?.0)
}

fn correct_with_position(frame: &BitString) -> Result<(BitString, Option<usize>)> {
    let syndrome = hamming_syndrome(frame);
    if syndrome == 0 {
        return Ok((frame.clone(), None));
    }

    if syndrome > frame.len() {
        return Err(FrameError::FecDecodingFailed {
            msg: format!(
                "syndrome {} points outside a {}-bit frame",
                syndrome,
                frame.len()
            ),
        });
    }

    let position = syndrome - 1;
    debug!("Hamming syndrome {} corrects bit {}", syndrome, position);
    Ok((frame.flip(position)?, Some(position)))
}

/// Data bits of a frame, parity positions dropped
pub fn hamming_extract(frame: &BitString) -> Result<BitString> {
    let data: Vec<bool> = frame
        .iter()
        .enumerate()
        .filter(|&(i, _)| !is_parity_position(i))
        .map(|(_, bit)| bit)
        .collect();

    if data.is_empty() {
        return Err(FrameError::FrameTooShort {
            len: frame.len(),
            min: 3,
        });
    }

    Ok(BitString::from_bits(data)?)
}

/// Hamming codec
#[derive(Debug, Clone, Copy, Default)]
pub struct Hamming;

impl ErrorControl for Hamming {
    fn method(&self) -> ErrorControlMethod {
        ErrorControlMethod::Hamming
    }

    fn encode(&self, data: &BitString) -> Result<BitString> {
        hamming_encode(data)
    }

    fn decode(&self, frame: &BitString) -> Result<DecodeResult> {
        let (bits, corrected) = correct_with_position(frame)?;
        Ok(DecodeResult::Recovered { bits, corrected })
    }

    fn redundancy_bits(&self, data_len: usize) -> usize {
        redundancy_bits(data_len)
    }
}
