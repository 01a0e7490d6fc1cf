// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - UI language
//! - `[album]` - Initial state of the album filter panel (ordering, minimum
//!   rating, favorites-only)
//!
//! # Examples
//!
//! ```no_run
//! use album_lens::config;
//!
//! let mut config = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod paths;

use crate::domain::ordering::{MediaOrdering, OrderDirection};
use crate::domain::rating::MinRating;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Album filter panel state restored at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AlbumConfig {
    /// Sort field key (`date_shot`, `updated_at`, `title`, `type`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,

    /// Sort direction (`ASC` or `DESC`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_direction: Option<OrderDirection>,

    /// Minimum rating threshold (3, 4 or 5).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<u8>,

    /// Show only favorites (only honored with a session credential).
    #[serde(default)]
    pub only_favorites: bool,
}

impl AlbumConfig {
    #[must_use]
    pub fn ordering(&self) -> MediaOrdering {
        MediaOrdering {
            order_by: self.order_by.clone(),
            order_direction: self.order_direction,
        }
    }

    pub fn set_ordering(&mut self, ordering: &MediaOrdering) {
        self.order_by.clone_from(&ordering.order_by);
        self.order_direction = ordering.order_direction;
    }

    #[must_use]
    pub fn min_rating(&self) -> Option<MinRating> {
        self.min_rating.and_then(MinRating::new)
    }

    /// Drops values a hand-edited file may carry but the panel cannot show.
    fn sanitize(&mut self) {
        if let Some(value) = self.min_rating {
            if MinRating::new(value).is_none() {
                tracing::warn!(value, "ignoring unsupported min_rating in config");
                self.min_rating = None;
            }
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub album: AlbumConfig,
}

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// A missing file yields the defaults. An unreadable or invalid file also
/// yields the defaults, with a warning logged.
pub fn load() -> Config {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> Config {
    let Some(path) = config_path_with_override(base_dir) else {
        return Config::default();
    };
    if !path.exists() {
        return Config::default();
    }
    match load_from_path(&path) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
            Config::default()
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let mut config: Config = toml::from_str(&content)?;
    config.album.sanitize();
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
