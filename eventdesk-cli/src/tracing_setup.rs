//! Tracing setup for the eventdesk CLI
//!
//! Usage:
//!   eventdesk --debug serve            # Debug logging to console
//!   RUST_LOG=eventdesk=debug eventdesk # Fine-grained log control

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Initialize tracing with console output.
///
/// RUST_LOG takes precedence; otherwise `debug` selects between debug and
/// info level defaults.
pub fn init(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug) // Show targets in debug mode
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
