#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Configuration management for droidcheck
//!
//! Configuration is merged from, lowest precedence first:
//! - Default values (the built-in MT5 Alert layout)
//! - An optional TOML file passed with `--config`
//! - CLI flags
//!
//! No file is read unless one is named explicitly.

pub mod constants;
pub mod project;

pub use project::ProjectConfig;

use droidcheck_errors::{ConfigError, Error};
use droidcheck_types::ColorChoice;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub project: ProjectConfig,
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GeneralConfig {
    #[serde(default)]
    pub color: ColorChoice,
}

impl Config {
    /// Load configuration from file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the file contents
    /// contain invalid TOML syntax that cannot be parsed.
    pub fn load_from_file(path: &Path) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound {
                    path: path.display().to_string(),
                }
                .into()
            } else {
                Error::io_with_path(&e, path)
            }
        })?;

        let config: Self = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        debug!(path = %path.display(), "Loaded configuration file");
        Ok(config)
    }

    /// Load configuration from an optional path or use the built-in defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, Error> {
        match path {
            Some(config_path) => Self::load_from_file(config_path),
            None => Ok(Self::default()),
        }
    }

    /// Check values that would make the verification meaningless
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty or dotted source
    /// extension, or an empty permission identifier.
    pub fn validate(&self) -> Result<(), Error> {
        let extension = &self.project.source_extension;
        if extension.is_empty() || extension.starts_with('.') {
            return Err(ConfigError::InvalidValue {
                field: "project.source_extension".to_string(),
                value: extension.clone(),
            }
            .into());
        }

        if let Some(permission) = self
            .project
            .required_permissions
            .iter()
            .find(|permission| permission.trim().is_empty())
        {
            return Err(ConfigError::InvalidValue {
                field: "project.required_permissions".to_string(),
                value: permission.clone(),
            }
            .into());
        }

        Ok(())
    }

    /// Render the effective configuration as TOML
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized.
    pub fn to_toml(&self) -> Result<String, Error> {
        toml::to_string_pretty(self).map_err(|e| {
            ConfigError::SerializeError {
                error: e.to_string(),
            }
            .into()
        })
    }
}
