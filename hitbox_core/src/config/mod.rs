//! Configuration loading from TOML or JSON files

mod hitbox;
mod roster;

pub use hitbox::HitboxConfig;
pub use roster::{load_roster, parse_roster, CombatantConfig, RosterConfig};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load a JSON string and deserialize it
pub fn parse_json<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = serde_json::from_str(content)?;
    Ok(config)
}

/// Load a file as TOML or JSON depending on its extension
pub fn load_any<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "toml" => load_toml(path),
        "json" => {
            let content = fs::read_to_string(path)?;
            parse_json(&content)
        }
        other => Err(ConfigError::UnsupportedFormat(format!(
            "{} ({})",
            path.display(),
            if other.is_empty() { "no extension" } else { other }
        ))),
    }
}

/// Load and validate a single hitbox configuration
pub fn load_config(path: &Path) -> Result<HitboxConfig, ConfigError> {
    let config: HitboxConfig = load_any(path)?;
    config.validate()?;
    Ok(config)
}
