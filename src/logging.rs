//! Logging initialization.
//!
//! The engine logs through `tracing` macros at call sites; embedding
//! applications that want output on stderr can install the default
//! subscriber here. Library consumers with their own subscriber skip this.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Respects `RUST_LOG`; defaults to `chartboard=info` when unset. Fails if
/// a subscriber is already installed.
pub fn init_logging() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chartboard=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}
