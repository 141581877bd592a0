//! Logging Setup Module
//!
//! Installs a `tracing` subscriber writing to stderr so reports on stdout stay
//! clean. The filter comes from `--log-level` when given, else `RUST_LOG`,
//! else `warn`.

use tracing_subscriber::EnvFilter;

use crate::error::{LabError, LabResult};

/// Filter used when neither `--log-level` nor `RUST_LOG` is set
pub const DEFAULT_FILTER: &str = "warn";

/// Pick the filter directive to use
pub fn filter_directive(log_level: Option<&str>, from_env: Option<String>) -> String {
    match (log_level, from_env) {
        (Some(level), _) => level.to_string(),
        (None, Some(env)) => env,
        (None, None) => DEFAULT_FILTER.to_string(),
    }
}

/// Install the global subscriber
pub fn init_logging(log_level: Option<&str>) -> LabResult<()> {
    let directive = filter_directive(log_level, std::env::var(EnvFilter::DEFAULT_ENV).ok());
    let filter = EnvFilter::try_new(&directive)
        .map_err(|e| LabError::Logging(format!("{}: {}", directive, e)))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| LabError::Logging(e.to_string()))
}
