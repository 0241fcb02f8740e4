//! # Log Setup
//!
//! Installs a `tracing-subscriber` formatter on stderr so log lines never
//! land in the menu output on stdout.

use tracing_subscriber::EnvFilter;

use crate::error::{ShellError, ShellResult};

/// Environment variable holding the log filter, e.g. `STRATA_LOG=debug`.
pub const LOG_ENV: &str = "STRATA_LOG";

/// Filter used when [`LOG_ENV`] is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns [`ShellError::Logging`] if a global subscriber is already set.
pub fn init_logging() -> ShellResult<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| ShellError::Logging(e.to_string()))
}
