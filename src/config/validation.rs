//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (interval > 0)
//! - Check that the log level parses as filter directives
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::AppConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("scheduler.interval_ms must be greater than zero")]
    ZeroInterval,

    #[error("observability.log_level {value:?} is not a valid filter: {reason}")]
    InvalidLogLevel { value: String, reason: String },
}

/// Check a parsed configuration, collecting every error found.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.scheduler.interval_ms == 0 {
        errors.push(ValidationError::ZeroInterval);
    }

    if let Err(e) = EnvFilter::try_new(&config.observability.log_level) {
        errors.push(ValidationError::InvalidLogLevel {
            value: config.observability.log_level.clone(),
            reason: e.to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_reports_all_errors() {
        let mut config = AppConfig::default();
        config.scheduler.interval_ms = 0;
        config.observability.log_level = "periodic_logger=loud".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0], ValidationError::ZeroInterval);
        assert!(matches!(errors[1], ValidationError::InvalidLogLevel { .. }));
    }

    #[test]
    fn test_accepts_targeted_directives() {
        let mut config = AppConfig::default();
        config.observability.log_level = "warn,periodic_logger=debug".to_string();
        assert!(validate_config(&config).is_ok());
    }
}
