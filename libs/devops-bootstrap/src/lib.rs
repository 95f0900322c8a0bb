//! Bootstrap helpers for the hello-devops binary: layered configuration
//! and console logging.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod config;
pub mod logging;

pub use config::{AppConfig, CliArgs, ConfigError, ENV_PREFIX};
pub use logging::{LogFormat, LoggingConfig, LoggingError, init_logging, level_for_verbosity};
