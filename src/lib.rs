//! Periodic logger library.
//!
//! Emits an INFO and an ERROR record every interval, the error record
//! carrying a synthetic cause, to an injected log sink.

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod observability;
pub mod scheduler;
pub mod sink;

pub use config::AppConfig;
pub use error::{AppError, SyntheticError};
pub use lifecycle::Shutdown;
pub use scheduler::{LoggerHandle, LoggerState, PeriodicLogger};
pub use sink::{LogSink, MemorySink, TracingSink};
