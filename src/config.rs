//! TOML configuration for the command-line tools.
//!
//! ```toml
//! log_filter = "rolling_block=debug"
//! format = "json"
//!
//! [limits]
//! max_states = 500000
//! max_runtime_steps = 500000
//! ```
//!
//! Every field is optional. A `[limits]` table replaces the budgets a puzzle carries.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::search::resources::ResourceLimits;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// `tracing` filter directive, used when `RUST_LOG` is unset.
    #[serde(default)]
    pub log_filter: Option<String>,

    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default)]
    pub limits: Option<ResourceLimits>,
}

impl SolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file can't be read, contains invalid TOML, or sets a zero budget.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: SolverConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(limits) = self.limits {
            if limits.max_states == 0 || limits.max_runtime_steps == 0 {
                return Err(ConfigError::Invalid(
                    "limits must be positive (max_states, max_runtime_steps)".to_string(),
                ));
            }
        }
        Ok(())
    }
}
