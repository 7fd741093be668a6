//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use periodic_logger::config::SchedulerConfig;
use periodic_logger::scheduler::{FixedClock, PeriodicLogger};
use periodic_logger::sink::MemorySink;

/// The instant every fixed clock in these tests is stopped at.
pub fn known_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap() + chrono::Duration::milliseconds(250)
}

/// Rendering of [`known_instant`].
pub const KNOWN_RENDERED: &str = "2024-03-09T14:05:07.250Z";

/// A logger wired to a fresh memory sink and a fixed clock.
pub fn fixed_logger(interval_ms: u64) -> (PeriodicLogger, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let logger = PeriodicLogger::new(
        SchedulerConfig { interval_ms },
        sink.clone(),
        Arc::new(FixedClock(known_instant())),
    );
    (logger, sink)
}
