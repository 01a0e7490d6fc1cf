// SPDX-License-Identifier: MPL-2.0
use album_lens::config::{self, AlbumConfig, Config, GeneralConfig};
use album_lens::domain::album::{Album, AlbumQuery};
use album_lens::domain::ordering::OrderDirection;
use album_lens::i18n::fluent::I18n;
use tempfile::tempdir;

fn config_with_language(language: &str) -> Config {
    Config {
        general: GeneralConfig {
            language: Some(language.to_string()),
        },
        album: AlbumConfig::default(),
    }
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    config::save_to_path(&config_with_language("en-US"), &temp_config_file_path)
        .expect("Failed to write initial config file");
    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr_or("album_filter.sort", "Sort"), "Sort");

    config::save_to_path(&config_with_language("fr"), &temp_config_file_path)
        .expect("Failed to write french config file");
    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr_or("album_filter.sort", "Sort"), "Trier");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_saved_album_preferences_drive_the_query() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut cfg = Config::default();
    cfg.album.order_by = Some("title".to_string());
    cfg.album.order_direction = Some(OrderDirection::Desc);
    cfg.album.min_rating = Some(4);
    config::save_with_override(&cfg, Some(dir.path().to_path_buf()))
        .expect("Failed to save config");

    let loaded = config::load_with_override(Some(dir.path().to_path_buf()));
    let query = AlbumQuery {
        ordering: loaded.album.ordering(),
        min_rating: loaded.album.min_rating(),
        only_favorites: loaded.album.only_favorites,
    };

    let album = Album::from_toml(
        r#"
[[media]]
title = "Bridge"
rating = 4

[[media]]
title = "Canyon"
rating = 5

[[media]]
title = "Alley"
rating = 2
"#,
    )
    .expect("Failed to parse album");

    let titles: Vec<_> = query
        .apply(&album)
        .into_iter()
        .map(|item| item.title.as_str())
        .collect();
    assert_eq!(titles, ["Canyon", "Bridge"]);
}

#[test]
fn test_unsupported_rating_in_config_is_dropped() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[album]\nmin_rating = 7\n").expect("Failed to write config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded.album.min_rating, None);
}
