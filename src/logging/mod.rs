//! Structured logging setup using tracing
//!
//! The engine itself only emits `tracing` events (skip warnings, run
//! summaries); embedding applications and tests call [`init_logging`] once
//! to install a console subscriber.
//!
//! # Example
//!
//! ```no_run
//! use ledgermask::logging::init_logging;
//!
//! init_logging("info", false).expect("Failed to initialize logging");
//! ```

use crate::domain::{MaskError, Result};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Initialize the logging system
///
/// Installs a console subscriber with an environment filter; `RUST_LOG`
/// overrides the given level. With `json_format` set, events are emitted as
/// structured JSON lines.
///
/// # Errors
///
/// Returns an error for an unknown level string or if a global subscriber
/// is already installed.
pub fn init_logging(log_level: &str, json_format: bool) -> Result<()> {
    let level = parse_log_level(log_level)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ledgermask={level}")));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true);

    let init_result = if json_format {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    init_result
        .map_err(|e| MaskError::Configuration(format!("Failed to initialize logging: {e}")))
}

/// Parse a log level from its string form
fn parse_log_level(log_level: &str) -> Result<Level> {
    match log_level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        other => Err(MaskError::Configuration(format!(
            "Invalid log level: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
        assert_eq!(parse_log_level("DEBUG").unwrap(), Level::DEBUG);
        assert!(parse_log_level("verbose").is_err());
    }
}
