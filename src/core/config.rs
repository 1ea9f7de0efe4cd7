//! Configuration file management.
//!
//! Handles reading and defaulting `esboot.toml` configuration files.
//! Every field has a default, so the file itself is optional.

use serde::Deserialize;
use std::path::PathBuf;
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Project configuration stored in `esboot.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Where the endpoint secret lives and which property to extract
    #[serde(default)]
    pub cluster: ClusterConfig,
    /// Virtualenv and dependency manifest locations
    #[serde(default)]
    pub python: PythonConfig,
    /// Default launch target for `esboot run`
    #[serde(default)]
    pub app: AppConfig,
}

/// Endpoint secret coordinates.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClusterConfig {
    /// Kubernetes namespace holding the secret
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Secret name
    #[serde(default = "default_secret")]
    pub secret: String,
    /// Pattern matched against the secret's data keys
    #[serde(default = "default_properties_key")]
    pub properties_key: String,
    /// Property whose value is the cluster endpoint
    #[serde(default = "default_host_property")]
    pub host_property: String,
}

/// Python environment locations.
#[derive(Debug, Deserialize)]
pub struct PythonConfig {
    /// Virtualenv directory, relative to the working directory
    #[serde(default = "default_venv")]
    pub venv: PathBuf,
    /// Dependency manifest installed into the virtualenv
    #[serde(default = "default_requirements")]
    pub requirements: PathBuf,
}

/// Application launch target.
#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Command run by `esboot run` when none is given on the command line
    #[serde(default)]
    pub command: Vec<String>,
}

fn default_namespace() -> String {
    constants::DEFAULT_NAMESPACE.to_string()
}

fn default_secret() -> String {
    constants::DEFAULT_SECRET.to_string()
}

fn default_properties_key() -> String {
    constants::DEFAULT_PROPERTIES_KEY.to_string()
}

fn default_host_property() -> String {
    constants::DEFAULT_HOST_PROPERTY.to_string()
}

fn default_venv() -> PathBuf {
    PathBuf::from(constants::DEFAULT_VENV_DIR)
}

fn default_requirements() -> PathBuf {
    PathBuf::from(constants::DEFAULT_REQUIREMENTS)
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            secret: default_secret(),
            properties_key: default_properties_key(),
            host_property: default_host_property(),
        }
    }
}

impl Default for PythonConfig {
    fn default() -> Self {
        Self {
            venv: default_venv(),
            requirements: default_requirements(),
        }
    }
}

impl Config {
    /// Path to the configuration file in the current directory
    pub fn config_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Load `esboot.toml`, falling back to defaults when it is absent.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            debug!("no {} found, using defaults", constants::CONFIG_FILE);
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::Read {
            path: path.clone(),
            source: e,
        })?;
        let config = toml::from_str(&contents).map_err(|e| ConfigError::Parse { path, source: e })?;
        Ok(config)
    }
}
