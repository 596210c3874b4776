//! Configuration: loads optional ~/.synthdial/config.yaml.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::keyboard::MAX_KEYS;
use crate::params::{default_seed, Dial, ParameterStore, StoreError};
use crate::playback::DEFAULT_ENDPOINT;

/// White keys drawn when nothing else is configured.
pub const DEFAULT_KEYBOARD_KEYS: usize = 20;

/// Errors reading a config file that exists.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config read error: {e}"),
            ConfigError::Yaml(e) => write!(f, "config parse error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(e: serde_yaml::Error) -> Self {
        ConfigError::Yaml(e)
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// URL the play request is POSTed to.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// White keys in the keyboard drawing.
    #[serde(default = "default_keyboard_keys")]
    pub keyboard_keys: usize,
    /// Replacement dial seed. None = built-in seed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dials: Option<Vec<Dial>>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_keyboard_keys() -> usize {
    DEFAULT_KEYBOARD_KEYS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            keyboard_keys: default_keyboard_keys(),
            dials: None,
        }
    }
}

/// Get the config file path.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".synthdial").join("config.yaml"))
}

impl AppConfig {
    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the rest of the program cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.keyboard_keys > MAX_KEYS {
            return Err(ConfigError::Invalid(format!(
                "keyboard_keys is {}, at most {MAX_KEYS} allowed",
                self.keyboard_keys
            )));
        }
        Ok(())
    }

    /// Load from the standard path, falling back to defaults when there is no
    /// home directory or no file.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Build the initial store from the configured (or built-in) seed.
    pub fn build_store(&self) -> Result<ParameterStore, StoreError> {
        match &self.dials {
            Some(dials) => ParameterStore::new(dials.clone()),
            None => ParameterStore::new(default_seed()),
        }
    }
}
