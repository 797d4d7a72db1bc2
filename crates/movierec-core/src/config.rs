//! Configuration for movierec.
//!
//! Sources are layered with `figment`, later ones overriding earlier ones:
//!
//! 1. Built-in defaults
//! 2. `movierec.toml` (or an explicit file)
//! 3. `MOVIEREC_` environment variables, `__` separating sections
//!    (e.g. `MOVIEREC_ENGINE__K=20`)
//!
//! ```toml
//! [data]
//! ratings_path = "Movie_data.csv"
//! titles_path = "Movie_Id_Titles.csv"
//!
//! [engine]
//! k = 10
//! top_n = 10
//! self_similarity = "include"
//!
//! [logging]
//! level = "info"
//! ```

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::RecommendParams;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "movierec.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "MOVIEREC_";

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A source could not be read or parsed.
    #[error("Failed to load configuration: {0}")]
    Load(String),

    /// The configuration could not be rendered as TOML.
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A value is outside its valid domain.
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue {
        /// Dotted key of the offending value.
        key: String,
        /// What is wrong with it.
        message: String,
    },
}

/// Input file locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Headerless ratings CSV.
    pub ratings_path: PathBuf,
    /// Titles CSV with `item_id,title` header.
    pub titles_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            ratings_path: PathBuf::from("Movie_data.csv"),
            titles_path: PathBuf::from("Movie_Id_Titles.csv"),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Complete movierec configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieRecConfig {
    /// Input files.
    pub data: DataConfig,
    /// Default recommendation parameters.
    pub engine: RecommendParams,
    /// Logging.
    pub logging: LoggingConfig,
}

impl MovieRecConfig {
    /// Loads defaults, `movierec.toml` if present, then environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::extract(Self::figment().merge(Toml::file(DEFAULT_CONFIG_FILE)))
    }

    /// Loads defaults, the given TOML file, then environment.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::Load(format!(
                "configuration file {} does not exist",
                path.display()
            )));
        }
        Self::extract(Self::figment().merge(Toml::file(path)))
    }

    /// Parses a TOML document on top of the defaults. Ignores environment.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let figment = Figment::from(Serialized::defaults(Self::default())).merge(Toml::string(toml));
        let config: Self = figment
            .extract()
            .map_err(|e| ConfigError::Load(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|e| ConfigError::Load(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Renders the effective configuration as a TOML document.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks value domains.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.engine.k == 0 {
            return Err(ConfigError::InvalidValue {
                key: "engine.k".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.data.ratings_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "data.ratings_path".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.data.titles_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "data.titles_path".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
