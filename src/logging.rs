//! Logging setup for the dashboard.
//!
//! Installs a global tracing subscriber writing to stdout, filtered by
//! `RUST_LOG` (default `info`).

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::{DashboardError, Result};

const DEFAULT_FILTER: &str = "info";

/// Initialize tracing. Fails if a global subscriber is already installed.
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init()
        .map_err(|e| DashboardError::Logging(e.to_string()))
}
