//! Signal samples and waveforms produced by line coding

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// One point of a line-coded signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignalSample {
    /// Sample index, starting at 0
    pub time: usize,
    /// Signal level, one of -1, 0 or +1
    pub level: i8,
}

impl SignalSample {
    pub fn new(time: usize, level: i8) -> Self {
        Self { time, level }
    }
}

/// Ordered sequence of signal samples with time indices `0..len`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Waveform {
    samples: Vec<SignalSample>,
}

impl Waveform {
    /// Create a waveform from a level sequence, numbering samples in order
    pub fn from_levels<I>(levels: I) -> Self
    where
        I: IntoIterator<Item = i8>,
    {
        let samples = levels
            .into_iter()
            .enumerate()
            .map(|(time, level)| SignalSample::new(time, level))
            .collect();

        Self { samples }
    }

    /// Get the number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the waveform is empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Get a reference to the samples
    pub fn samples(&self) -> &[SignalSample] {
        &self.samples
    }

    /// Levels only, in time order
    pub fn levels(&self) -> Vec<i8> {
        self.samples.iter().map(|s| s.level).collect()
    }

    /// Same timing with every level negated
    pub fn negated(&self) -> Self {
        Self::from_levels(self.samples.iter().map(|s| -s.level))
    }
}

impl Index<usize> for Waveform {
    type Output = SignalSample;

    fn index(&self, index: usize) -> &Self::Output {
        &self.samples[index]
    }
}

impl<'a> IntoIterator for &'a Waveform {
    type Item = &'a SignalSample;
    type IntoIter = std::slice::Iter<'a, SignalSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_levels_numbers_samples() {
        let waveform = Waveform::from_levels(vec![1, -1, 0]);
        assert_eq!(waveform.len(), 3);
        assert_eq!(waveform[0], SignalSample::new(0, 1));
        assert_eq!(waveform[2], SignalSample::new(2, 0));
        assert_eq!(waveform.levels(), vec![1, -1, 0]);
    }

    #[test]
    fn test_negated() {
        let waveform = Waveform::from_levels(vec![1, 0, -1]);
        assert_eq!(waveform.negated().levels(), vec![-1, 0, 1]);
    }

    #[test]
    fn test_serialize_shape() {
        let waveform = Waveform::from_levels(vec![1]);
        let json = serde_json::to_string(&waveform).unwrap();
        assert_eq!(json, r#"{"samples":[{"time":0,"level":1}]}"#);
    }
}
