//! Configuration file parsing.
//!
//! This module handles loading the optional TOML configuration file that
//! provides defaults for how kubectl is invoked.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants;
use crate::errors::ConfigError;

/// Configuration file structure. Every field is optional.
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// kubectl binary to run.
    #[serde(default)]
    pub kubectl: Option<String>,
    /// Namespace used when `--namespace` is not given.
    #[serde(default)]
    pub namespace: Option<String>,
    /// kubeconfig context used when `--context` is not given.
    #[serde(default)]
    pub context: Option<String>,
    /// kubeconfig path used when `--kubeconfig` is not given.
    #[serde(default)]
    pub kubeconfig: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(format!("{}: {}", path, e)))?;
        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        if let Some(ns) = &config.namespace {
            crate::validation::validate_namespace(ns)
                .with_context(|| format!("Invalid namespace in config file: {}", path))?;
        }

        Ok(config)
    }

    /// Load configuration from the discovered config file, or defaults when
    /// no file exists.
    pub fn load() -> Result<Self> {
        let path = crate::paths::find_config_file()?;
        Self::load_from(&path)
    }

    /// Load configuration from `path`, or defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        tracing::debug!(path = %path.display(), "loading config file");
        Self::from_file(&path.to_string_lossy())
    }

    /// The kubectl binary to invoke.
    pub fn kubectl_binary(&self) -> &str {
        self.kubectl
            .as_deref()
            .unwrap_or(constants::kubectl::DEFAULT_BINARY)
    }
}
