//! XDG-compliant path resolution for configuration files.
//!
//! This module provides functions to locate the configuration and environment
//! files following the XDG Base Directory Specification, with fallback to the
//! current directory.

use anyhow::Result;
use std::env;
use std::path::PathBuf;

use crate::constants::config::{APP_DIR, FILE_NAME, LOCAL_FILE_NAME, PATH_ENV};

fn default_xdg_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join(APP_DIR))
}

fn env_xdg_dir() -> Option<PathBuf> {
    env::var("XDG_CONFIG_HOME")
        .ok()
        .map(|xdg| PathBuf::from(xdg).join(APP_DIR))
}

/// Find the config file.
/// Priority:
/// 1. VIEW_SECRET_CONFIG from environment (if set and the file exists)
/// 2. Current directory/view-secret.toml
/// 3. ~/.config/view-secret/config.toml (default XDG location)
/// 4. XDG_CONFIG_HOME/view-secret/config.toml (if XDG_CONFIG_HOME is set)
///
/// When none exists the default creation path is returned; callers treat a
/// missing file as "use defaults".
pub fn find_config_file() -> Result<PathBuf> {
    if let Ok(config_path) = env::var(PATH_ENV) {
        let path = PathBuf::from(&config_path);
        if path.exists() {
            return Ok(path);
        }
        tracing::warn!(path = %config_path, "{} points to a missing file", PATH_ENV);
    }

    if let Ok(current_dir) = env::current_dir() {
        let local = current_dir.join(LOCAL_FILE_NAME);
        if local.exists() {
            return Ok(local);
        }
    }

    if let Some(dir) = default_xdg_dir() {
        let path = dir.join(FILE_NAME);
        if path.exists() {
            return Ok(path);
        }
    }

    if let Some(dir) = env_xdg_dir() {
        let path = dir.join(FILE_NAME);
        if path.exists() {
            return Ok(path);
        }
    }

    Ok(get_config_creation_path())
}

/// Get the path where a config file would normally live.
/// Priority:
/// 1. XDG_CONFIG_HOME/view-secret/config.toml (if XDG_CONFIG_HOME is set)
/// 2. ~/.config/view-secret/config.toml (default XDG location)
/// 3. Current directory/view-secret.toml (fallback)
pub fn get_config_creation_path() -> PathBuf {
    if let Some(dir) = env_xdg_dir() {
        return dir.join(FILE_NAME);
    }

    if let Some(dir) = default_xdg_dir() {
        return dir.join(FILE_NAME);
    }

    PathBuf::from(LOCAL_FILE_NAME)
}

/// Find and load a .env file.
/// Priority:
/// 1. Current directory/.env
/// 2. ~/.config/view-secret/.env (default XDG location)
/// 3. XDG_CONFIG_HOME/view-secret/.env (if XDG_CONFIG_HOME is set)
pub fn load_env_file() {
    let current_dir_env = PathBuf::from(".env");
    if current_dir_env.exists() {
        let _ = dotenv::from_path(&current_dir_env);
        return;
    }

    if let Some(dir) = default_xdg_dir() {
        let path = dir.join(".env");
        if path.exists() {
            let _ = dotenv::from_path(&path);
            return;
        }
    }

    if let Some(dir) = env_xdg_dir() {
        let path = dir.join(".env");
        if path.exists() {
            let _ = dotenv::from_path(&path);
        }
    }
}
