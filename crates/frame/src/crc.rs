//! CRC-8 error detection
//!
//! Each data bit is XORed into bit 7 of an 8-bit register, which is then
//! clocked eight times against the generator polynomial. The final register
//! is appended to the data MSB first.

use crate::fec::{DecodeResult, ErrorControl, ErrorControlMethod};
use crate::{FrameError, Result};
use bitline_core::BitString;
use tracing::warn;

/// x^8 + x^2 + x + 1
pub const CRC8_POLYNOMIAL: u8 = 0x07;

/// Checksum width in bits
pub const CRC8_BITS: usize = 8;

/// Register value after consuming `bits` with `polynomial`
pub fn crc8_checksum_with<I>(bits: I, polynomial: u8) -> u8
where
    I: IntoIterator<Item = bool>,
{
    bits.into_iter().fold(0u8, |crc, bit| {
        let mut crc = crc ^ ((bit as u8) << 7);
        for _ in 0..8 {
            crc = if crc & 0x80 != 0 {
                (crc << 1) ^ polynomial
            } else {
                crc << 1
            };
        }
        crc
    })
}

/// CRC-8 of `data` with the 0x07 polynomial
pub fn crc8_checksum(data: &BitString) -> u8 {
    crc8_checksum_with(data.iter(), CRC8_POLYNOMIAL)
}

/// Append the CRC-8 checksum to `data`
pub fn crc8_encode(data: &BitString) -> BitString {
    Crc8::default().append(data)
}

/// Verify a CRC-8 frame, returning its data portion on a match
pub fn crc8_detect(frame: &BitString) -> Result<DecodeResult> {
    Crc8::default().verify(frame)
}

/// CRC-8 codec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crc8 {
    polynomial: u8,
}

impl Crc8 {
    /// Create a codec with a custom generator (the implicit x^8 term omitted)
    pub fn new(polynomial: u8) -> Self {
        Self { polynomial }
    }

    pub fn polynomial(&self) -> u8 {
        self.polynomial
    }

    pub fn checksum(&self, data: &BitString) -> u8 {
        crc8_checksum_with(data.iter(), self.polynomial)
    }

    fn append(&self, data: &BitString) -> BitString {
        data.concat(&BitString::from_u8_msb(self.checksum(data)))
    }

    fn verify(&self, frame: &BitString) -> Result<DecodeResult> {
        if frame.len() <= CRC8_BITS {
            return Err(FrameError::FrameTooShort {
                len: frame.len(),
                min: CRC8_BITS + 1,
            });
        }

        let (data, checksum) = frame.split_at(frame.len() - CRC8_BITS)?;
        let received = checksum.to_u8_msb()?;
        let computed = self.checksum(&data);

        if computed != received {
            warn!(
                "CRC-8 mismatch: received {:#04x}, computed {:#04x}",
                received, computed
            );
            return Ok(DecodeResult::DetectionFailure);
        }

        Ok(DecodeResult::Recovered {
            bits: data,
            corrected: None,
        })
    }
}

impl Default for Crc8 {
    fn default() -> Self {
        Self::new(CRC8_POLYNOMIAL)
    }
}

impl ErrorControl for Crc8 {
    fn method(&self) -> ErrorControlMethod {
        ErrorControlMethod::Crc8
    }

    fn encode(&self, data: &BitString) -> Result<BitString> {
        Ok(self.append(data))
    }

    fn decode(&self, frame: &BitString) -> Result<DecodeResult> {
        self.verify(frame)
    }

    fn redundancy_bits(&self, _data_len: usize) -> usize {
        CRC8_BITS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn bits(s: &str) -> BitString {
        BitString::parse(s).unwrap()
    }

    #[test]
    fn test_single_one_bit() {
        // 0x80 clocked through 0x07 eight times
        assert_eq!(crc8_checksum(&bits("1")), 0x89);
        assert_eq!(crc8_encode(&bits("1")).to_string(), "110001001");
    }

    #[test]
    fn test_zero_data_has_zero_checksum() {
        assert_eq!(crc8_checksum(&bits("0000")), 0x00);
        assert_eq!(crc8_encode(&bits("0")).to_string(), "000000000");
    }

    #[test]
    fn test_known_checksum() {
        assert_eq!(crc8_checksum(&bits("1011")), 0x0e);
    }

    #[test]
    fn test_round_trip() {
        let data = bits("1101011");
        let frame = crc8_encode(&data);
        assert_eq!(frame.len(), data.len() + CRC8_BITS);
        assert_eq!(
            crc8_detect(&frame).unwrap(),
            DecodeResult::Recovered {
                bits: data,
                corrected: None
            }
        );
    }

    #[test]
    fn test_every_single_flip_is_detected() {
        for len in 1..=32 {
            let data: Vec<bool> = (0..len).map(|i| (i * 5 + len) % 4 < 2).collect();
            let frame = crc8_encode(&BitString::from_bits(data).unwrap());

            for position in 0..frame.len() {
                let corrupted = frame.flip(position).unwrap();
                assert!(
                    crc8_detect(&corrupted).unwrap().is_detection_failure(),
                    "len {} position {}",
                    len,
                    position
                );
            }
        }
    }

    #[test]
    fn test_short_frame() {
        assert_eq!(
            crc8_detect(&bits("10101010")),
            Err(FrameError::FrameTooShort { len: 8, min: 9 })
        );
    }

    #[test]
    fn test_custom_polynomial() {
        let crc = Crc8::new(0x31);
        assert_eq!(crc.polynomial(), 0x31);
        let data = bits("100");
        let frame = crc.encode(&data).unwrap();
        assert_eq!(crc.decode(&frame).unwrap().bits(), Some(&data));
    }

    #[quickcheck]
    fn prop_round_trip(input: Vec<bool>) -> bool {
        match BitString::from_bits(input) {
            Ok(data) => crc8_detect(&crc8_encode(&data)).unwrap().bits() == Some(&data),
            Err(_) => true,
        }
    }
}
