/// User configuration
///
/// Stored as JSON in the user's config directory:
/// - Linux: ~/.config/supap-gallery/config.json
/// - macOS: ~/Library/Application Support/supap-gallery/config.json
/// - Windows: %APPDATA%\supap-gallery\config.json
///
/// Every field is optional in the file; missing ones take their defaults.
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Thumbnail tile width in logical pixels
    pub thumbnail_width: f32,
    /// Thumbnail tile height in logical pixels
    pub thumbnail_height: f32,
    /// Gap between tiles, both directions
    pub spacing: f32,
    pub window_width: f32,
    pub window_height: f32,
    pub theme: ThemeChoice,
    /// Gallery manifest to show instead of the bundled one
    pub manifest: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            thumbnail_width: 320.0,
            thumbnail_height: 256.0,
            spacing: 24.0,
            window_width: 1200.0,
            window_height: 800.0,
            theme: ThemeChoice::Dark,
            manifest: None,
        }
    }
}

/// Where the config file lives when `--config` is not given
pub fn default_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push("supap-gallery");
    path.push("config.json");
    Some(path)
}

/// Read the config file. A missing file yields the defaults.
pub fn load(path: &Path) -> Result<Config> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Config::default()),
        Err(source) => {
            return Err(Error::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_str(&text).map_err(Error::Config)
}

/// Like [`load`], but falls back to the defaults on any error
pub fn load_or_default(path: Option<&Path>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };

    match load(path) {
        Ok(config) => {
            tracing::debug!(path = %path.display(), "configuration loaded");
            config
        }
        Err(err) => {
            tracing::warn!(%err, "using default configuration");
            Config::default()
        }
    }
}
