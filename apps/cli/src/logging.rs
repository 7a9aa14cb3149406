//! Logging setup using `tracing-subscriber`.
//!
//! Logs go to stderr so stdout stays reserved for results.
//!
//! # Log Levels
//!
//! - default: `warn`
//! - `-q`: `error`
//! - `-v`: `debug` (rule errors and registry events)
//! - `-vv`: `trace` (every rule outcome)
//!
//! Without `-v`/`-q`, `RUST_LOG` takes precedence over the default.

use std::io;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Configuration for logging behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    /// Level used when `RUST_LOG` is not consulted.
    pub level: LevelFilter,
    /// Whether `RUST_LOG` may override `level`.
    pub use_env_filter: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::WARN,
            use_env_filter: true,
        }
    }
}

impl LogConfig {
    /// Builds a configuration from `-v` count and `-q`.
    #[must_use]
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        let level = match (quiet, verbose) {
            (true, _) => LevelFilter::ERROR,
            (false, 0) => LevelFilter::WARN,
            (false, 1) => LevelFilter::DEBUG,
            (false, _) => LevelFilter::TRACE,
        };
        Self {
            level,
            use_env_filter: !quiet && verbose == 0,
        }
    }

    fn filter(self) -> EnvFilter {
        let fallback = || EnvFilter::default().add_directive(self.level.into());
        if self.use_env_filter {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
        } else {
            fallback()
        }
    }
}

/// Installs the global subscriber.
///
/// # Errors
///
/// A subscriber was already installed.
pub fn init_logging(config: LogConfig) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(config.filter())
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize logging: {error}"))
}
