//! The periodic logger.
//!
//! # Responsibilities
//! - Own the recurring timer
//! - On each tick, render the current time once and emit an INFO record
//!   followed by an ERROR record carrying a synthetic cause
//!
//! # Design Decisions
//! - First tick fires at start, then every interval
//! - Ticks run inside a single task, so they never overlap
//! - A stalled tick delays the schedule instead of bursting to catch up
//! - Shutdown wins over a tick due at the same instant
//! - A panicking sink loses that tick only; the schedule keeps running

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tokio::sync::broadcast::{self, error::TryRecvError};
use tokio::task::{self, JoinHandle};
use tokio::time::{self, MissedTickBehavior};

use crate::config::SchedulerConfig;
use crate::error::SyntheticError;
use crate::lifecycle::Shutdown;
use crate::scheduler::clock::{format_timestamp, Clock};
use crate::sink::LogSink;

/// Prefix of every emitted message.
pub const MESSAGE_PREFIX: &str = "Log output: ";

/// Lifecycle state of a spawned logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggerState {
    Stopped,
    Running,
}

pub struct PeriodicLogger {
    config: SchedulerConfig,
    sink: Arc<dyn LogSink>,
    clock: Arc<dyn Clock>,
}

impl PeriodicLogger {
    pub fn new(config: SchedulerConfig, sink: Arc<dyn LogSink>, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            sink,
            clock,
        }
    }

    /// Emit one tick's pair of records.
    pub fn tick(&self) {
        let message = format!("{}{}", MESSAGE_PREFIX, format_timestamp(self.clock.now()));

        self.sink.info(&message);
        self.sink.error(&message, &SyntheticError);
    }

    /// Tick until the shutdown signal arrives or its sender is dropped.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        let period = self.config.interval();

        tracing::info!(interval_ms = self.config.interval_ms, "Periodic logger starting");

        let mut ticker = time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = shutdown.recv() => break,
                _ = ticker.tick() => {
                    // Let tasks woken at this same instant run first, so a
                    // stop issued right now is seen before the tick fires.
                    task::yield_now().await;
                    if !matches!(shutdown.try_recv(), Err(TryRecvError::Empty)) {
                        break;
                    }

                    if panic::catch_unwind(AssertUnwindSafe(|| self.tick())).is_err() {
                        tracing::error!("Log sink panicked during tick, continuing");
                    }
                }
            }
        }

        tracing::info!("Periodic logger received shutdown signal, exiting loop");
    }

    /// Start ticking on the current Tokio runtime.
    pub fn spawn(self, shutdown: &Shutdown) -> LoggerHandle {
        let receiver = shutdown.subscribe();
        let task = tokio::spawn(self.run(receiver));

        LoggerHandle {
            shutdown: shutdown.clone(),
            task: Some(task),
        }
    }
}

/// Handle to a spawned [`PeriodicLogger`].
pub struct LoggerHandle {
    shutdown: Shutdown,
    task: Option<JoinHandle<()>>,
}

impl LoggerHandle {
    pub fn state(&self) -> LoggerState {
        match &self.task {
            Some(task) if !task.is_finished() => LoggerState::Running,
            _ => LoggerState::Stopped,
        }
    }

    /// Signal shutdown and wait for the loop to exit.
    ///
    /// No record is emitted once this returns. Stopping twice is a no-op.
    pub async fn stop(&mut self) {
        let Some(task) = self.task.take() else {
            return;
        };

        self.shutdown.trigger();
        if let Err(e) = task.await {
            tracing::error!(error = %e, "Periodic logger task failed");
        }
    }
}
