//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Resolve the effective configuration from optional CLI inputs.
///
/// Without a path the defaults are used. An interval override replaces the
/// file's value and the result is validated again.
pub fn resolve_config(
    path: Option<&Path>,
    interval_override_ms: Option<u64>,
) -> Result<AppConfig, ConfigError> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    if let Some(interval_ms) = interval_override_ms {
        config.scheduler.interval_ms = interval_ms;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    Ok(config)
}
