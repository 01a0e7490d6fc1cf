// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::ordering::OrderingUpdate;
use crate::session::Session;
use crate::ui::album_filter;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
///
/// `AlbumFilter` carries raw panel interactions; the setter variants are what
/// the panel turns them into.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    AlbumFilter(album_filter::Message),
    SetOrdering(OrderingUpdate),
    SetMinRating(u8),
    SetOnlyFavorites(bool),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional album manifest to open on startup.
    pub album_path: Option<PathBuf>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ALBUM_LENS_CONFIG_DIR`.
    pub config_dir: Option<PathBuf>,
    pub session: Session,
}
