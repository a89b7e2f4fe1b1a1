//! Logging initialization
//!
//! Console logging with `RUST_LOG` based filtering, defaulting to `info`.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber for console output.
///
/// Safe to call once per process; returns an error if a global subscriber
/// is already installed.
pub fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    Registry::default()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init()?;

    Ok(())
}
