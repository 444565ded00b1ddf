//! Locating and reading the TOML game configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use game_core::GameConfig;

use crate::APP_NAME;

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// `config.toml` inside the per-user configuration directory.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Reads the configuration from `explicit` when given, else from the default location.
///
/// An explicit path must exist. The default file is optional and its absence means defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<GameConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.is_file() => path,
            _ => {
                log::info!("no {CONFIG_FILE_NAME} found, using default settings");
                return Ok(GameConfig::default());
            }
        },
    };
    read_config_file(&path)
}

pub fn read_config_file(path: &Path) -> Result<GameConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config = GameConfig::from_toml_str(&text)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    log::info!("loaded settings from {}", path.display());
    Ok(config)
}
