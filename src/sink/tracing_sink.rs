//! Sink backed by the `tracing` facade.

use std::error::Error;

use crate::sink::LogSink;

/// Forwards records to whatever `tracing` subscriber is installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for TracingSink {
    fn info(&self, message: &str) {
        tracing::info!(target: "periodic_logger::tick", "{}", message);
    }

    fn error(&self, message: &str, cause: &(dyn Error + 'static)) {
        tracing::error!(target: "periodic_logger::tick", error = cause, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SyntheticError;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn lines(&self) -> Vec<String> {
            let bytes = self.0.lock().unwrap();
            String::from_utf8_lossy(&bytes).lines().map(str::to_owned).collect()
        }
    }

    fn capture(f: impl FnOnce()) -> Vec<String> {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .without_time()
            .with_target(true)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, f);
        captured.lines()
    }

    #[test]
    fn test_emits_info_then_error_with_cause() {
        let lines = capture(|| {
            let sink = TracingSink::new();
            sink.info("Log output: 2024-03-09T14:05:07.250Z");
            sink.error("Log output: 2024-03-09T14:05:07.250Z", &SyntheticError);
        });

        assert_eq!(lines.len(), 2);

        assert!(lines[0].contains("INFO"));
        assert!(lines[0].contains("periodic_logger::tick"));
        assert!(lines[0].contains("Log output: 2024-03-09T14:05:07.250Z"));
        assert!(!lines[0].contains("error="));

        assert!(lines[1].contains("ERROR"));
        assert!(lines[1].contains("periodic_logger::tick"));
        assert!(lines[1].contains("Log output: 2024-03-09T14:05:07.250Z"));
        assert!(lines[1].contains(&format!("error={}", SyntheticError)));
    }

    #[test]
    fn test_emits_without_subscriber() {
        let sink = TracingSink::new();
        sink.info("Log output: test");
        sink.error("Log output: test", &SyntheticError);
    }
}
