//! Configuration for the registry runtime.

use std::path::PathBuf;

use larder_foundation::{Error, ErrorKind, Height, Result};

/// Environment variable holding the log filter directive.
pub const ENV_LOG: &str = "LARDER_LOG";
/// Environment variable selecting JSON log output.
pub const ENV_LOG_JSON: &str = "LARDER_LOG_JSON";
/// Environment variable holding the snapshot file path.
pub const ENV_SNAPSHOT_PATH: &str = "LARDER_SNAPSHOT_PATH";
/// Environment variable holding the height the registry starts at.
pub const ENV_INITIAL_HEIGHT: &str = "LARDER_INITIAL_HEIGHT";

/// Configuration for a [`Registry`](crate::Registry) and its logging.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// `tracing-subscriber` filter directive, e.g. `"larder=debug"`.
    pub log_filter: String,

    /// Output format: true for JSON, false for human-readable.
    pub json_logs: bool,

    /// Where snapshots are saved and loaded, if anywhere.
    pub snapshot_path: Option<PathBuf>,

    /// Height stamped on the first submitted call.
    pub initial_height: Height,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            json_logs: false,
            snapshot_path: None,
            initial_height: Height::new(1),
        }
    }
}

impl RuntimeConfig {
    /// Reads configuration from the process environment.
    ///
    /// Reads:
    /// - `LARDER_LOG` - Optional, defaults to `info`
    /// - `LARDER_LOG_JSON` - Optional, defaults to false
    /// - `LARDER_SNAPSHOT_PATH` - Optional
    /// - `LARDER_INITIAL_HEIGHT` - Optional, defaults to 1
    ///
    /// # Errors
    ///
    /// Returns a config error if `LARDER_INITIAL_HEIGHT` is not an integer.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns a config error if the initial height is not an integer.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let log_filter = lookup(ENV_LOG).unwrap_or(defaults.log_filter);

        let json_logs = lookup(ENV_LOG_JSON)
            .map(|s| s.eq_ignore_ascii_case("true") || s == "1")
            .unwrap_or(defaults.json_logs);

        let snapshot_path = lookup(ENV_SNAPSHOT_PATH)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let initial_height = match lookup(ENV_INITIAL_HEIGHT) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Height::new)
                .map_err(|e| {
                    Error::new(ErrorKind::ConfigError(format!(
                        "{ENV_INITIAL_HEIGHT}={raw:?} is not a height: {e}"
                    )))
                })?,
            None => defaults.initial_height,
        };

        Ok(Self {
            log_filter,
            json_logs,
            snapshot_path,
            initial_height,
        })
    }

    /// Builder method to set the log filter.
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Builder method to enable/disable JSON output.
    #[must_use]
    pub fn with_json_logs(mut self, json: bool) -> Self {
        self.json_logs = json;
        self
    }

    /// Builder method to set the snapshot path.
    #[must_use]
    pub fn with_snapshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.snapshot_path = Some(path.into());
        self
    }

    /// Builder method to set the initial height.
    #[must_use]
    pub fn with_initial_height(mut self, height: Height) -> Self {
        self.initial_height = height;
        self
    }
}
