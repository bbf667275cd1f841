//! Tracing subscriber setup

use crate::config::EngineConfig;
use anyhow::{Context, Result};
use std::str::FromStr;
use tracing::Level;

/// Parse a level name such as "info" or "DEBUG"
pub fn parse_level(name: &str) -> Result<Level> {
    Level::from_str(name.trim()).with_context(|| format!("Invalid log level: {:?}", name))
}

/// Install a global fmt subscriber at the configured level
pub fn init_logging(config: &EngineConfig) -> Result<()> {
    let level = parse_level(&config.log_level)?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;

    tracing::debug!("Logging initialised at {}", level);
    Ok(())
}
