//! Configuration module for tagq
//!
//! Settings come from three layers, later ones winning:
//!
//! 1. built-in defaults
//! 2. `config.toml` in the user's config directory (`~/.config/tagq/config.toml` on Linux)
//! 3. `TAGQ_*` environment variables (`TAGQ_RECORDS_FILE`, `TAGQ_SUGGESTION_LIMIT`, ...)
//!
//! Command-line flags are applied on top by the binary.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default number of suggestions shown
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// How results are printed
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored, human-readable text
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TagqConfig {
    /// Records file used when `--records` is not given
    #[serde(default)]
    pub records_file: Option<PathBuf>,

    /// Number of suggestions returned by `tagq suggest`
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,
}

const fn default_suggestion_limit() -> usize {
    DEFAULT_SUGGESTION_LIMIT
}

impl Default for TagqConfig {
    fn default() -> Self {
        Self {
            records_file: None,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            quiet: false,
            format: OutputFormat::Text,
        }
    }
}

impl TagqConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("tagq").join("config.toml"))
    }

    /// Load configuration from the default location and the environment.
    ///
    /// A missing config file is not an error; defaults are used instead.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file or environment cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        Self::build(Some(&path), Environment::with_prefix("TAGQ"))
    }

    /// Load configuration from an explicit file plus the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file does not exist or cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::Message(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        Self::build(Some(path), Environment::with_prefix("TAGQ"))
    }

    fn build(path: Option<&Path>, env: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        builder
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()
    }
}
