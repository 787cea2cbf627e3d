//! Layered configuration for the calculator harness.
//!
//! Order of precedence (lowest first): built-in defaults, YAML file,
//! `CALCULATOR__*` environment variables, CLI flags.

use std::path::Path;

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

/// Environment prefix for configuration overrides, e.g. `CALCULATOR__LOGGING__LEVEL`.
/// Only known keys are read; other `CALCULATOR__*` variables are ignored.
pub const ENV_PREFIX: &str = "CALCULATOR__";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter directive, e.g. `warn` or `calculator=debug`.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl AppConfig {
    /// Load defaults, then the YAML file at `path` (if any), then the environment.
    ///
    /// # Errors
    /// Returns an error if `path` does not exist or the merged configuration
    /// cannot be deserialized.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                anyhow::bail!("config file does not exist: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        figment
            .merge(
                Env::prefixed(ENV_PREFIX)
                    .split("__")
                    .only(&["logging.level", "logging.format"]),
            )
            .extract()
            .context("invalid calculator configuration")
    }

    /// Raise the log level according to `-v` occurrences.
    pub fn apply_verbosity(&mut self, verbose: u8) {
        let level = match verbose {
            0 => return,
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        level.clone_into(&mut self.logging.level);
    }

    /// Render the effective configuration as YAML.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self)
            .map_err(|e| anyhow::anyhow!("failed to render configuration as YAML: {e}"))
    }
}
