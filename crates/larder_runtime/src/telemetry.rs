//! Logging setup.

use larder_foundation::{Error, ErrorKind, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::RuntimeConfig;

/// Installs the global `tracing` subscriber described by `config`.
///
/// `RUST_LOG` takes precedence over `config.log_filter` when set.
///
/// # Errors
///
/// Returns a config error if the filter does not parse or a global
/// subscriber is already installed.
pub fn init_tracing(config: &RuntimeConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => build_filter(&config.log_filter)?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if config.json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };

    installed.map_err(|e| {
        Error::new(ErrorKind::ConfigError(format!(
            "tracing already initialised: {e}"
        )))
    })
}

/// Parses a filter directive.
///
/// # Errors
///
/// Returns a config error naming the bad directive.
pub fn build_filter(directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directive).map_err(|e| {
        Error::new(ErrorKind::ConfigError(format!(
            "invalid log filter {directive:?}: {e}"
        )))
    })
}
