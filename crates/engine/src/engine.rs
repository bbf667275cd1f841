//! The encode pipeline exposed to the UI

use crate::config::EngineConfig;
use crate::Result;
use bitline_core::{BitString, Waveform};
use bitline_frame::inject::inject_single_bit_error;
use bitline_frame::{DecodeResult, ErrorControlMethod};
use bitline_linecode::Technique;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::info;

/// What the UI shows for the error-control path of one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorControlReport {
    pub method: ErrorControlMethod,
    /// Validated input bits
    pub data: BitString,
    /// Data plus redundancy
    pub encoded: BitString,
    /// `encoded` with one bit flipped
    pub corrupted: BitString,
    /// 0-based index of the flipped bit
    pub error_position: usize,
    pub result: DecodeResult,
}

/// One "encode" action from the UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeRequest {
    pub bits: String,
    pub technique: Option<Technique>,
    pub method: Option<ErrorControlMethod>,
}

/// Everything the UI renders after an "encode" action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeResponse {
    pub technique: Technique,
    pub waveform: Waveform,
    pub report: ErrorControlReport,
}

impl EncodeResponse {
    /// JSON form handed to the UI
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Line coding and error control engine.
///
/// Holds configuration only; every call starts from scratch.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Create a new engine with the given configuration
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Line-code a textual bit string
    pub fn encode(&self, bits: &str, technique: Technique) -> Result<Waveform> {
        Ok(bitline_linecode::encode_str(bits, technique)?)
    }

    /// Protect, corrupt and check a textual bit string.
    ///
    /// Uses the configured seed when present, fresh entropy otherwise.
    pub fn encode_with_error_control(
        &self,
        bits: &str,
        method: ErrorControlMethod,
    ) -> Result<ErrorControlReport> {
        let mut rng = self.rng();
        self.encode_with_error_control_using(bits, method, &mut rng)
    }

    /// As [`Engine::encode_with_error_control`], with an explicit random source
    pub fn encode_with_error_control_using<R>(
        &self,
        bits: &str,
        method: ErrorControlMethod,
        rng: &mut R,
    ) -> Result<ErrorControlReport>
    where
        R: Rng + ?Sized,
    {
        let data = BitString::parse(bits)?;
        let codec = method.codec();

        let encoded = codec.encode(&data)?;
        let corrupted = inject_single_bit_error(&encoded, rng)?;
        let result = codec.decode(&corrupted.bits)?;

        info!(
            "{}: {} data bits, {} frame bits, error at {}, result {}",
            method,
            data.len(),
            encoded.len(),
            corrupted.position,
            result
        );

        Ok(ErrorControlReport {
            method,
            data,
            encoded,
            corrupted: corrupted.bits,
            error_position: corrupted.position,
            result,
        })
    }

    /// Run both paths for one UI request
    pub fn run(&self, request: &EncodeRequest) -> Result<EncodeResponse> {
        let mut rng = self.rng();
        self.run_using(request, &mut rng)
    }

    /// As [`Engine::run`], with an explicit random source
    pub fn run_using<R>(&self, request: &EncodeRequest, rng: &mut R) -> Result<EncodeResponse>
    where
        R: Rng + ?Sized,
    {
        let technique = request.technique.unwrap_or(self.config.default_technique);
        let method = request.method.unwrap_or(self.config.default_method);

        let waveform = self.encode(&request.bits, technique)?;
        let report = self.encode_with_error_control_using(&request.bits, method, rng)?;

        Ok(EncodeResponse {
            technique,
            waveform,
            report,
        })
    }

    fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EngineError;
    use bitline_frame::hamming::{hamming_extract, redundancy_bits};
    use quickcheck_macros::quickcheck;

    fn seeded() -> Engine {
        Engine::new(EngineConfig {
            seed: Some(17),
            ..EngineConfig::default()
        })
    }

    #[test]
    fn test_encode_scenarios() {
        let engine = Engine::default();
        assert_eq!(engine.encode("101", Technique::NrzL).unwrap().levels(), vec![1, -1, 1]);
        assert_eq!(
            engine.encode("11", Technique::Manchester).unwrap().levels(),
            vec![1, -1, 1, -1]
        );
    }

    #[test]
    fn test_invalid_input_is_a_user_error() {
        let engine = Engine::default();

        let err = engine.encode("10a1", Technique::NrzL).unwrap_err();
        assert!(err.is_user_error());

        for method in ErrorControlMethod::ALL {
            let err = engine.encode_with_error_control("10a1", method).unwrap_err();
            assert!(err.is_user_error(), "{:?}", err);
        }

        let err = engine.encode_with_error_control("", ErrorControlMethod::Crc8).unwrap_err();
        assert!(matches!(err, EngineError::Core(_)));
    }

    #[test]
    fn test_hamming_report() {
        let report = seeded()
            .encode_with_error_control("1011", ErrorControlMethod::Hamming)
            .unwrap();

        assert_eq!(report.encoded.to_string(), "0110011");
        assert_eq!(report.corrupted, report.encoded.flip(report.error_position).unwrap());
        assert_eq!(
            report.result,
            DecodeResult::Recovered {
                bits: report.encoded.clone(),
                corrected: Some(report.error_position)
            }
        );
    }

    #[test]
    fn test_crc_report() {
        let report = seeded()
            .encode_with_error_control("1", ErrorControlMethod::Crc8)
            .unwrap();

        assert_eq!(report.encoded.to_string(), "110001001");
        assert!(report.error_position < 9);
        assert_eq!(report.result, DecodeResult::DetectionFailure);
        assert_eq!(report.result.to_string(), "Error detected");
    }

    #[test]
    fn test_seed_makes_reports_reproducible() {
        let engine = seeded();
        let first = engine
            .encode_with_error_control("110100111010", ErrorControlMethod::Hamming)
            .unwrap();
        let second = engine
            .encode_with_error_control("110100111010", ErrorControlMethod::Hamming)
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_run_uses_config_defaults() {
        let engine = Engine::new(EngineConfig {
            default_technique: Technique::Ami,
            default_method: ErrorControlMethod::Crc8,
            seed: Some(3),
            ..EngineConfig::default()
        });

        let request = EncodeRequest {
            bits: "0110".to_string(),
            technique: None,
            method: None,
        };
        let response = engine.run(&request).unwrap();

        assert_eq!(response.technique, Technique::Ami);
        assert_eq!(response.waveform.levels(), vec![0, 1, -1, 0]);
        assert_eq!(response.report.method, ErrorControlMethod::Crc8);
        assert!(response.report.result.is_detection_failure());
    }

    #[test]
    fn test_response_json() {
        let request = EncodeRequest {
            bits: "10".to_string(),
            technique: Some(Technique::NrzL),
            method: Some(ErrorControlMethod::Hamming),
        };
        let response = seeded().run(&request).unwrap();
        let json = response.to_json().unwrap();

        assert!(json.contains(r#""technique":"NRZ-L""#));
        assert!(json.contains(r#""method":"Hamming Code""#));
        assert!(json.contains(r#""outcome":"recovered""#));

        let back: EncodeResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, response);
    }

    #[test]
    fn test_request_from_json() {
        let request: EncodeRequest =
            serde_json::from_str(r#"{"bits":"1100","technique":"RZ","method":"CRC-8"}"#).unwrap();
        assert_eq!(request.technique, Some(Technique::Rz));
        assert_eq!(request.method, Some(ErrorControlMethod::Crc8));
    }

    #[quickcheck]
    fn prop_hamming_recovers_data(input: Vec<bool>, seed: u64) -> bool {
        if input.is_empty() || input.len() > 64 {
            return true;
        }
        let bits: String = input.iter().map(|&b| if b { '1' } else { '0' }).collect();

        let mut rng = StdRng::seed_from_u64(seed);
        let report = Engine::default()
            .encode_with_error_control_using(&bits, ErrorControlMethod::Hamming, &mut rng)
            .unwrap();

        report.encoded.len() == input.len() + redundancy_bits(input.len())
            && report
                .result
                .bits()
                .map(|frame| hamming_extract(frame).unwrap() == report.data)
                .unwrap_or(false)
    }

    #[quickcheck]
    fn prop_crc_detects_injected_error(input: Vec<bool>, seed: u64) -> bool {
        if input.is_empty() {
            return true;
        }
        let bits: String = input.iter().map(|&b| if b { '1' } else { '0' }).collect();

        let mut rng = StdRng::seed_from_u64(seed);
        Engine::default()
            .encode_with_error_control_using(&bits, ErrorControlMethod::Crc8, &mut rng)
            .unwrap()
            .result
            .is_detection_failure()
    }
}
