//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every field has a default so an empty file is a valid configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for the periodic logger process.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Tick schedule.
    pub scheduler: SchedulerConfig,

    /// Log subscriber settings.
    pub observability: ObservabilityConfig,
}

/// Scheduler configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Milliseconds between the start of consecutive ticks.
    pub interval_ms: u64,
}

impl SchedulerConfig {
    /// Tick period as a `Duration`.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self { interval_ms: 5000 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Filter directives used when `RUST_LOG` is unset (e.g. "info").
    pub log_level: String,

    /// Colorize terminal output.
    pub ansi: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            ansi: true,
        }
    }
}
