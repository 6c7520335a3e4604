//! Optional defaults from a `thread-press.toml` file.
//!
//! CLI flags always win over file values. An explicitly passed config file
//! that fails to parse is fatal; an auto-discovered one only logs a warning
//! and falls back to defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "thread-press.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    pub author: Option<String>,
    pub tag: Option<String>,
    pub timezone: Option<String>,
    pub username: Option<String>,
    #[serde(default)]
    pub unsafe_video: bool,
}

pub fn load_config(search_root: &Path, config_path: Option<&Path>) -> Result<Config> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(search_root),
    };

    let Some(config_file) = discovered else {
        return Ok(Config::default());
    };

    let content = fs::read_to_string(&config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    match toml::from_str(&content) {
        Ok(cfg) => Ok(cfg),
        Err(e) => {
            if config_path_provided {
                Err(e).with_context(|| {
                    format!("Failed to parse config file: {}", config_file.display())
                })
            } else {
                tracing::warn!(
                    "Failed to parse auto-discovered config {}: {}",
                    config_file.display(),
                    e
                );
                Ok(Config::default())
            }
        }
    }
}

fn discover_config(search_root: &Path) -> Option<PathBuf> {
    let candidate = search_root.join(CONFIG_FILENAME);
    candidate.is_file().then_some(candidate)
}
