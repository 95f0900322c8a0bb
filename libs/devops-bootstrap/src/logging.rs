//! Console logging setup on top of `tracing-subscriber`.
//!
//! Logs go to stderr so that stdout carries only command output.
//! `RUST_LOG`, when set, takes precedence over the configured level.

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("invalid log level '{level}': {source}")]
    InvalidLevel {
        level: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter directive for console output, e.g. `info` or `calculator=debug,warn`.
    pub console_level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            console_level: "warn".to_owned(),
            format: LogFormat::Text,
        }
    }
}

/// Map `-v` occurrences to a console level (`-v` info, `-vv` debug, `-vvv` trace).
#[must_use]
pub const fn level_for_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Build the filter: `RUST_LOG` if set and valid, otherwise `console_level`.
///
/// # Errors
/// Returns [`LoggingError::InvalidLevel`] if `console_level` is not a valid directive.
pub fn build_filter(cfg: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&cfg.console_level).map_err(|source| LoggingError::InvalidLevel {
        level: cfg.console_level.clone(),
        source,
    })
}

/// Install the global subscriber. Later calls leave the first subscriber in place.
///
/// # Errors
/// Returns [`LoggingError::InvalidLevel`] if the configured level cannot be parsed.
pub fn init_logging(cfg: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = build_filter(cfg)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    let installed = match cfg.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    if installed.is_err() {
        tracing::debug!("global subscriber already installed, keeping it");
    }
    Ok(())
}
