//! Log subscriber initialization.
//!
//! # Design Decisions
//! - `RUST_LOG` wins over the configured level
//! - Installing twice is an error, not a panic

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::error::AppError;

/// Build the filter: `RUST_LOG` if set and valid, otherwise `config.log_level`.
pub fn env_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Install the global tracing subscriber.
pub fn init(config: &ObservabilityConfig) -> Result<(), AppError> {
    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(tracing_subscriber::fmt::layer().with_ansi(config.ansi))
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
