//! Logging sinks.
//!
//! # Data Flow
//! ```text
//! PeriodicLogger tick
//!     → LogSink::info(message)
//!     → LogSink::error(message, cause)
//!
//! Implementations:
//!     → tracing_sink.rs (tracing events; subscriber formats and routes)
//!     → memory.rs (in-order capture for tests)
//! ```
//!
//! # Design Decisions
//! - The sink owns formatting, routing and persistence of a record
//! - Sink methods are infallible to the caller; a failing backend is the
//!   sink's own concern and never stops the scheduler
//! - Shared across tasks as `Arc<dyn LogSink>`

use std::error::Error;

pub mod memory;
pub mod tracing_sink;

pub use memory::{LogRecord, MemorySink};
pub use tracing_sink::TracingSink;

/// Destination for leveled log records.
pub trait LogSink: Send + Sync {
    /// Emit an informational record.
    fn info(&self, message: &str);

    /// Emit an error record with an attached cause.
    fn error(&self, message: &str, cause: &(dyn Error + 'static));
}
