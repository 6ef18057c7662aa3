use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::state::data::DEFAULT_RANGE_DAYS;

pub const DEFAULT_FEED_URL: &str = "https://cdn.jsdelivr.net/gh/GCA-Classroom/apod/data.json";

/// Size of generated thumbnails (bounding square)
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 256;

/// Size of the working preview shown in the detail view
pub const DEFAULT_PREVIEW_SIZE: u32 = 1280;

/// Image downloads allowed to run at the same time
pub const DEFAULT_MAX_DOWNLOADS: usize = 6;

/// User settings, read once at startup
///
/// The file is optional and never written back. Missing keys take
/// their default values.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Location of the feed document
    pub feed_url: String,
    pub thumbnail_size: u32,
    pub preview_size: u32,
    /// Length of the default range, counted back from today
    pub default_range_days: i64,
    /// Cap on concurrent thumbnail downloads
    pub max_downloads: usize,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            thumbnail_size: DEFAULT_THUMBNAIL_SIZE,
            preview_size: DEFAULT_PREVIEW_SIZE,
            default_range_days: DEFAULT_RANGE_DAYS,
            max_downloads: DEFAULT_MAX_DOWNLOADS,
            user_agent: format!("apod-gallery/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Config {
    /// Load the config from the user's config directory
    ///
    /// - Linux: ~/.config/apod-gallery/config.json
    /// - macOS: ~/Library/Application Support/apod-gallery/config.json
    /// - Windows: %APPDATA%\apod-gallery\config.json
    ///
    /// Any problem with the file is logged and the defaults are used.
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            tracing::warn!("Could not determine config directory, using defaults");
            return Self::default();
        };

        match Self::from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("apod-gallery");
        path.push("config.json");
        Some(path)
    }

    /// Read a config file; a missing file yields the defaults
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                let config = Self::from_json(&contents)?;
                tracing::info!("Loaded config from {}", path.display());
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
