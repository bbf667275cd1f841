//! Configuration management for the engine

use anyhow::{Context, Result};
use bitline_frame::ErrorControlMethod;
use bitline_linecode::Technique;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Technique used when a request does not name one
    pub default_technique: Technique,
    /// Error control used when a request does not name one
    pub default_method: ErrorControlMethod,
    /// Fixed seed for fault injection; fresh entropy when unset
    pub seed: Option<u64>,
    /// Log level name
    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_technique: Technique::NrzL,
            default_method: ErrorControlMethod::Hamming,
            seed: None,
            log_level: "info".to_string(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON or TOML file, chosen by extension
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if is_json(path) {
            serde_json::from_str(&content).context("Failed to parse JSON config file")
        } else {
            toml::from_str(&content).context("Failed to parse TOML config file")
        }
    }

    /// Save configuration to a JSON or TOML file, chosen by extension
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self).context("Failed to serialize config")?
        } else {
            toml::to_string_pretty(self).context("Failed to serialize config")?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        Ok(())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("json")
}
