//! Scheduling subsystem.
//!
//! # Data Flow
//! ```text
//! Tokio interval (periodic.rs)
//!     → Clock::now (clock.rs)
//!     → format_timestamp
//!     → LogSink::info, then LogSink::error with SyntheticError
//! ```
//!
//! # State Machine
//! ```text
//! Stopped → Running: PeriodicLogger::spawn
//! Running → Stopped: LoggerHandle::stop / shutdown broadcast
//! ```

pub mod clock;
pub mod periodic;

pub use clock::{format_timestamp, Clock, FixedClock, SystemClock, TIMESTAMP_FORMAT};
pub use periodic::{LoggerHandle, LoggerState, PeriodicLogger, MESSAGE_PREFIX};
