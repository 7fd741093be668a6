//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Parse CLI → Load config → Init logging → Spawn periodic logger
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     Broadcast → Ticker loop exits → Handle joined → Exit
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
