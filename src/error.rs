//! Crate error types.

use thiserror::Error;

use crate::config::loader::ConfigError;

/// Errors that can abort the process during startup.
///
/// Nothing raised while ticking ends up here: the periodic logger has no
/// failure path of its own.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The global tracing subscriber could not be installed.
    #[error("logging init failed: {0}")]
    Logging(String),

    /// Runtime or signal handler I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The deliberately constructed error attached to every ERROR record.
///
/// It marks that the error path was exercised and carries no other payload.
/// It is never returned from any operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Error)]
#[error("synthetic failure raised to exercise the error logging path")]
pub struct SyntheticError;
