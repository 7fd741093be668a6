//! In-memory sink that captures records in emission order.

use std::error::Error;
use std::sync::{Mutex, MutexGuard};

use tracing::Level;

use crate::sink::LogSink;

/// A captured log record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: Level,
    pub message: String,
    /// Rendered cause, present on error records.
    pub cause: Option<String>,
}

impl LogRecord {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: Level::INFO,
            message: message.into(),
            cause: None,
        }
    }

    pub fn error(message: impl Into<String>, cause: impl Into<String>) -> Self {
        Self {
            level: Level::ERROR,
            message: message.into(),
            cause: Some(cause.into()),
        }
    }
}

#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<LogRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn records(&self) -> Vec<LogRecord> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogRecord>> {
        // A panic while holding the lock cannot leave a half-pushed record.
        self.records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn push(&self, record: LogRecord) {
        self.lock().push(record);
    }
}

impl LogSink for MemorySink {
    fn info(&self, message: &str) {
        self.push(LogRecord::info(message));
    }

    fn error(&self, message: &str, cause: &(dyn Error + 'static)) {
        self.push(LogRecord::error(message, cause.to_string()));
    }
}
