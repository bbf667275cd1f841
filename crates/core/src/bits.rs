//! Validated bit sequences

use crate::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// An ordered, non-empty sequence of bits.
///
/// Every `BitString` is validated on construction, so downstream code can
/// rely on it holding at least one bit. Textual form is a run of `'0'` and
/// `'1'` characters, most significant (first transmitted) bit first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BitString {
    bits: Vec<bool>,
}

impl BitString {
    /// Parse a string of `'0'`/`'1'` characters
    pub fn parse(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(CoreError::invalid_input("bit string must not be empty"));
        }

        let bits = input
            .chars()
            .enumerate()
            .map(|(position, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(CoreError::invalid_input(format!(
                    "non-binary character {:?} at position {}",
                    other, position
                ))),
            })
            .collect::<Result<Vec<bool>>>()?;

        Ok(Self { bits })
    }

    /// Create a bit string from raw bits
    pub fn from_bits(bits: Vec<bool>) -> Result<Self> {
        if bits.is_empty() {
            return Err(CoreError::invalid_input("bit string must not be empty"));
        }

        Ok(Self { bits })
    }

    /// Build the 8-bit, MSB-first representation of a byte
    pub fn from_u8_msb(value: u8) -> Self {
        let bits = (0..8).rev().map(|shift| (value >> shift) & 1 == 1).collect();
        Self { bits }
    }

    /// Interpret up to the first 8 bits as an MSB-first unsigned value
    pub fn to_u8_msb(&self) -> Result<u8> {
        if self.bits.len() > 8 {
            return Err(CoreError::invalid_input(format!(
                "{} bits do not fit in a byte",
                self.bits.len()
            )));
        }

        Ok(self
            .bits
            .iter()
            .fold(0u8, |acc, &bit| (acc << 1) | bit as u8))
    }

    /// Number of bits
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Always false; kept for API symmetry with collections
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Get the bit at `index`, if any
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// Iterate over the bits in order
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// Borrow the underlying bits
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    /// Consume into the underlying bits
    pub fn into_bits(self) -> Vec<bool> {
        self.bits
    }

    /// Return a copy with the bit at `index` inverted
    pub fn flip(&self, index: usize) -> Result<Self> {
        if index >= self.bits.len() {
            return Err(CoreError::IndexOutOfRange {
                index,
                len: self.bits.len(),
            });
        }

        let mut bits = self.bits.clone();
        bits[index] = !bits[index];
        Ok(Self { bits })
    }

    /// Every bit inverted
    pub fn complement(&self) -> Self {
        Self {
            bits: self.bits.iter().map(|&bit| !bit).collect(),
        }
    }

    /// Append `other` after `self`
    pub fn concat(&self, other: &BitString) -> Self {
        let mut bits = Vec::with_capacity(self.len() + other.len());
        bits.extend_from_slice(&self.bits);
        bits.extend_from_slice(&other.bits);
        Self { bits }
    }

    /// Split into `[0, mid)` and `[mid, len)`; both halves must be non-empty
    pub fn split_at(&self, mid: usize) -> Result<(Self, Self)> {
        if mid == 0 || mid >= self.bits.len() {
            return Err(CoreError::IndexOutOfRange {
                index: mid,
                len: self.bits.len(),
            });
        }

        let (head, tail) = self.bits.split_at(mid);
        Ok((
            Self { bits: head.to_vec() },
            Self { bits: tail.to_vec() },
        ))
    }
}

impl Index<usize> for BitString {
    type Output = bool;

    fn index(&self, index: usize) -> &Self::Output {
        &self.bits[index]
    }
}

impl FromStr for BitString {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for BitString {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<BitString> for String {
    fn from(value: BitString) -> Self {
        value.to_string()
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}
