//! Periodic logger (v1)
//!
//! Boots, then every interval writes one INFO and one ERROR line, the latter
//! with a synthetic error attached, until SIGINT/SIGTERM.
//!
//! ```text
//!   CLI ──▶ config ──▶ observability::logging::init
//!                            │
//!                            ▼
//!   Shutdown ◀── signals   PeriodicLogger ──tick──▶ TracingSink ──▶ stdout
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use periodic_logger::config::resolve_config;
use periodic_logger::error::AppError;
use periodic_logger::lifecycle::{signals, Shutdown};
use periodic_logger::observability::logging;
use periodic_logger::scheduler::{PeriodicLogger, SystemClock};
use periodic_logger::sink::TracingSink;

#[derive(Parser)]
#[command(name = "periodic-logger")]
#[command(about = "Emit an INFO and an ERROR log line on a fixed interval", long_about = None)]
struct Cli {
    /// TOML configuration file; defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override scheduler.interval_ms.
    #[arg(short, long)]
    interval_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    let config = resolve_config(cli.config.as_deref(), cli.interval_ms)?;
    logging::init(&config.observability)?;

    tracing::info!("periodic-logger v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config_path = ?cli.config,
        interval_ms = config.scheduler.interval_ms,
        log_level = %config.observability.log_level,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    let logger = PeriodicLogger::new(
        config.scheduler.clone(),
        Arc::new(TracingSink::new()),
        Arc::new(SystemClock),
    );
    let mut handle = logger.spawn(&shutdown);

    let waited = signals::wait_for_signal().await;
    handle.stop().await;
    waited?;

    tracing::info!("Shutdown complete");
    Ok(())
}
