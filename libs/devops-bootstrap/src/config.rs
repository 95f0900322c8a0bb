//! Layered application configuration.
//!
//! Sources are merged in order, later ones winning:
//! 1) defaults -> 2) YAML file (if provided) -> 3) env (`APP__*`) -> 4) CLI overrides

use std::path::{Path, PathBuf};

use calculator::CalculatorConfig;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

use crate::logging::{LoggingConfig, level_for_verbosity};

/// Prefix for environment overrides, e.g. `APP__LOGGING__CONSOLE_LEVEL=debug`.
pub const ENV_PREFIX: &str = "APP__";
const ENV_SEPARATOR: &str = "__";
/// Top-level sections accepted from the environment; other `APP__*` vars are ignored.
const ENV_SECTIONS: [&str; 2] = ["logging", "calculator"];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file does not exist: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to parse configuration")]
    Load(#[from] Box<figment::Error>),
    #[error("failed to render configuration as YAML: {0}")]
    Render(String),
}

/// Effective application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub calculator: CalculatorConfig,
}

/// Command-line values that feed into [`AppConfig::apply_cli_overrides`].
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub print_config: bool,
    pub verbose: u8,
}

impl AppConfig {
    /// Load defaults, then the YAML file at `path` (if any), then `APP__*` env vars.
    ///
    /// # Errors
    /// Returns [`ConfigError::NotFound`] if `path` is given but is not a file, and
    /// [`ConfigError::Load`] if any layer fails to parse or has unknown keys.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            figment = figment.merge(Yaml::file_exact(path));
        }

        let config: Self = figment
            .merge(
                Env::prefixed(ENV_PREFIX)
                    .split(ENV_SEPARATOR)
                    .filter(|key| is_section_key(key.as_str())),
            )
            .extract()
            .map_err(Box::new)?;

        tracing::debug!(source = ?path, "configuration loaded");
        Ok(config)
    }

    /// Apply CLI overrides on top of the loaded layers.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(level) = level_for_verbosity(args.verbose) {
            level.clone_into(&mut self.logging.console_level);
        }
    }

    /// # Errors
    /// Returns [`ConfigError::Render`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_saphyr::to_string(self).map_err(|e| ConfigError::Render(e.to_string()))
    }
}

fn is_section_key(key: &str) -> bool {
    let key = key.to_ascii_lowercase();
    ENV_SECTIONS.iter().any(|section| {
        key.strip_prefix(section)
            .is_some_and(|rest| rest.starts_with('.') || rest.starts_with(ENV_SEPARATOR))
    })
}
