// SPDX-License-Identifier: MPL-2.0
//! Location of the configuration directory.
//!
//! # Resolution Order
//!
//! 1. Explicit override (tests, portable setups)
//! 2. `ALBUM_LENS_CONFIG_DIR` environment variable (if set and non-empty)
//! 3. Platform-specific config directory with the app name appended

use std::path::PathBuf;

pub const APP_NAME: &str = "AlbumLens";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "ALBUM_LENS_CONFIG_DIR";

pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
