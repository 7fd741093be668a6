//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Lifecycle events and tick records
//!     → tracing facade
//!     → logging.rs subscriber (EnvFilter + fmt layer)
//!     → stdout
//! ```

pub mod logging;
