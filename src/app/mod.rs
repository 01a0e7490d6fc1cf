// SPDX-License-Identifier: MPL-2.0
//! Application root state hosting the album filter panel.
//!
//! The `App` owns the values the panel displays (ordering, rating threshold,
//! favorites flag), hands the panel setters built from its own [`Message`]
//! variants, and persists every change to the config file.

mod message;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::domain::album::{Album, AlbumQuery, MediaItem};
use crate::domain::ordering::MediaOrdering;
use crate::domain::rating::MinRating;
use crate::i18n::fluent::I18n;
use crate::session::{Authentication, Session};
use crate::ui::album_filter;
use iced::{window, Element, Task};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    session: Session,
    config_dir: Option<PathBuf>,
    album: Option<Album>,
    ordering: MediaOrdering,
    min_rating: Option<u8>,
    only_favorites: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("authenticated", &self.session.is_authenticated())
            .field("has_album", &self.album.is_some())
            .field("ordering", &self.ordering)
            .field("min_rating", &self.min_rating)
            .field("only_favorites", &self.only_favorites)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 480;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot; the flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .run()
}

impl App {
    /// Restores the panel state from config and loads the album, if any.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load_with_override(flags.config_dir.clone());
        let i18n = I18n::new(flags.lang, &config);

        let album = flags
            .album_path
            .as_deref()
            .and_then(|path| match Album::load_from_path(path) {
                Ok(album) => Some(album),
                Err(err) => {
                    tracing::error!(path = %path.display(), error = %err, "failed to open album");
                    None
                }
            });

        let app = Self {
            i18n,
            session: flags.session,
            config_dir: flags.config_dir,
            album,
            ordering: config.album.ordering(),
            min_rating: config.album.min_rating().map(MinRating::value),
            only_favorites: config.album.only_favorites,
        };
        tracing::debug!(?app, "application booted");

        (app, Task::none())
    }

    pub fn title(&self) -> String {
        let base = self.i18n.tr("window-title");
        match self.album.as_ref().and_then(|album| album.title.as_deref()) {
            Some(title) => format!("{title} - {base}"),
            None => base,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AlbumFilter(message) => {
                let next = album_filter::dispatch(&self.filter_context(), message);
                if let Some(next) = next {
                    return self.update(next);
                }
            }
            Message::SetOrdering(update) => {
                self.ordering.apply(update);
                self.persist_preferences();
            }
            Message::SetMinRating(value) => match MinRating::new(value) {
                Some(rating) => {
                    self.min_rating = Some(rating.value());
                    self.persist_preferences();
                }
                None => tracing::warn!(value, "ignoring unsupported rating threshold"),
            },
            Message::SetOnlyFavorites(only_favorites) => {
                self.only_favorites = only_favorites;
                self.persist_preferences();
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            filter: self.filter_context(),
            album: self.album.as_ref(),
            media: self.visible_media(),
        })
    }

    pub fn ordering(&self) -> &MediaOrdering {
        &self.ordering
    }

    pub fn min_rating(&self) -> Option<u8> {
        self.min_rating
    }

    pub fn only_favorites(&self) -> bool {
        self.only_favorites
    }

    /// Query built from the panel state.
    ///
    /// The favorites filter is only honored for authenticated sessions, since
    /// the panel hides the checkbox otherwise.
    pub fn query(&self) -> AlbumQuery {
        AlbumQuery {
            ordering: self.ordering.clone(),
            min_rating: self.min_rating.and_then(MinRating::new),
            only_favorites: self.only_favorites && self.session.is_authenticated(),
        }
    }

    /// Media of the open album after filtering and sorting.
    pub fn visible_media(&self) -> Vec<&MediaItem> {
        match &self.album {
            Some(album) => self.query().apply(album),
            None => Vec::new(),
        }
    }

    fn filter_context(&self) -> album_filter::ViewContext<'_, Message> {
        album_filter::ViewContext {
            i18n: &self.i18n,
            session: &self.session,
            only_favorites: self.only_favorites,
            set_only_favorites: Some(Message::SetOnlyFavorites),
            ordering: Some(&self.ordering),
            set_ordering: Some(Message::SetOrdering),
            min_rating: self.min_rating,
            set_min_rating: Some(Message::SetMinRating),
        }
    }

    fn persist_preferences(&self) {
        let mut cfg: Config = config::load_with_override(self.config_dir.clone());
        cfg.album.set_ordering(&self.ordering);
        cfg.album.min_rating = self.min_rating;
        cfg.album.only_favorites = self.only_favorites;

        if let Err(err) = config::save_with_override(&cfg, self.config_dir.clone()) {
            tracing::warn!(error = %err, "failed to save config");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ordering::{OrderDirection, OrderingUpdate};
    use crate::ui::album_filter::{favorites_checkbox, rating_dropdown, sorting_options};
    use std::fs;
    use tempfile::TempDir;

    const MANIFEST: &str = r#"
title = "Trip"

[[media]]
title = "beach"
date_shot = "2024-07-02T10:15:00"
rating = 5
favorite = true

[[media]]
title = "Ferry"
kind = "video"
date_shot = "2024-07-01T09:00:00"
rating = 3

[[media]]
title = "Attic"
date_shot = "2024-06-20T18:30:00"
rating = 4
favorite = true
"#;

    fn boot(session: Session) -> (App, TempDir) {
        let dir = TempDir::new().expect("temp dir");
        let album_path = dir.path().join("album.toml");
        fs::write(&album_path, MANIFEST).expect("write manifest");

        let (app, _) = App::new(Flags {
            lang: Some("en-US".into()),
            album_path: Some(album_path),
            config_dir: Some(dir.path().to_path_buf()),
            session,
        });
        (app, dir)
    }

    fn titles(app: &App) -> Vec<&str> {
        app.visible_media()
            .into_iter()
            .map(|item| item.title.as_str())
            .collect()
    }

    #[test]
    fn title_includes_album_title() {
        let (app, _dir) = boot(Session::anonymous());
        assert!(app.title().starts_with("Trip - "));
    }

    #[test]
    fn default_lists_by_date_shot_ascending() {
        let (app, _dir) = boot(Session::anonymous());
        assert_eq!(titles(&app), ["Attic", "Ferry", "beach"]);
    }

    #[test]
    fn panel_messages_reach_the_app_state() {
        let (mut app, _dir) = boot(Session::with_token("token"));

        let _ = app.update(Message::AlbumFilter(album_filter::Message::Sorting(
            sorting_options::Message::OrderBySelected("title".into()),
        )));
        let _ = app.update(Message::AlbumFilter(album_filter::Message::Sorting(
            sorting_options::Message::ToggleDirection,
        )));
        assert_eq!(app.ordering().order_by.as_deref(), Some("title"));
        assert_eq!(app.ordering().order_direction, Some(OrderDirection::Asc));
        assert_eq!(titles(&app), ["Attic", "beach", "Ferry"]);

        let _ = app.update(Message::AlbumFilter(album_filter::Message::Rating(
            rating_dropdown::Message::Selected("4".into()),
        )));
        assert_eq!(app.min_rating(), Some(4));
        assert_eq!(titles(&app), ["Attic", "beach"]);

        let _ = app.update(Message::AlbumFilter(album_filter::Message::Favorites(
            favorites_checkbox::Message::Toggled(true),
        )));
        assert!(app.only_favorites());
    }

    #[test]
    fn anonymous_session_cannot_toggle_favorites() {
        let (mut app, _dir) = boot(Session::anonymous());
        let _ = app.update(Message::AlbumFilter(album_filter::Message::Favorites(
            favorites_checkbox::Message::Toggled(true),
        )));
        assert!(!app.only_favorites());
    }

    #[test]
    fn unsupported_rating_is_rejected() {
        let (mut app, _dir) = boot(Session::anonymous());
        let _ = app.update(Message::SetMinRating(2));
        assert_eq!(app.min_rating(), None);
    }

    #[test]
    fn changes_are_persisted_and_restored() {
        let (mut app, dir) = boot(Session::with_token("token"));
        let _ = app.update(Message::SetOrdering(OrderingUpdate::SetOrderBy(
            "updated_at".into(),
        )));
        let _ = app.update(Message::SetOrdering(OrderingUpdate::SetOrderDirection(
            OrderDirection::Desc,
        )));
        let _ = app.update(Message::SetMinRating(3));
        let _ = app.update(Message::SetOnlyFavorites(true));

        let (restored, _) = App::new(Flags {
            config_dir: Some(dir.path().to_path_buf()),
            session: Session::with_token("token"),
            ..Flags::default()
        });
        assert_eq!(
            restored.ordering(),
            &MediaOrdering::new("updated_at", OrderDirection::Desc)
        );
        assert_eq!(restored.min_rating(), Some(3));
        assert!(restored.only_favorites());
    }

    #[test]
    fn favorites_filter_needs_credential() {
        let (mut app, _dir) = boot(Session::anonymous());
        let _ = app.update(Message::SetOnlyFavorites(true));
        assert!(!app.query().only_favorites);
        assert_eq!(titles(&app).len(), 3);
    }

    #[test]
    fn missing_album_yields_empty_list() {
        let dir = TempDir::new().expect("temp dir");
        let (app, _) = App::new(Flags {
            album_path: Some(dir.path().join("missing.toml")),
            config_dir: Some(dir.path().to_path_buf()),
            ..Flags::default()
        });
        assert!(app.visible_media().is_empty());
        let _ = app.view();
    }
}
