//! # BC Telemetry
//!
//! Logging setup for billing-cycle binaries.
//!
//! The library crates (`bc-01-schedule-projector`, `bc-02-envelope-codec`)
//! only emit `tracing` events. Installing a subscriber is the host's job;
//! this crate is how the workspace's own binaries do it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bc_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let _guard = init_logging(&TelemetryConfig::from_env())?;
//!     // Application code here
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `BC_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `BC_JSON_LOGS` | `false` | JSON formatted log lines |
//! | `BC_CONSOLE_OUTPUT` | `true` | Write logs to stderr |
//! | `BC_SERVICE_NAME` | `billing-cycle` | Name on the startup event |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{build_filter, init_logging, LoggingGuard};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize logger: {0}")]
    LoggerInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
