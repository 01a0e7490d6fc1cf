// SPDX-License-Identifier: MPL-2.0
//! In-memory album and the query that orders and filters it.
//!
//! Albums are described by a TOML manifest:
//!
//! ```toml
//! title = "Summer"
//!
//! [[media]]
//! title = "Beach"
//! kind = "image"
//! date_shot = "2024-07-02T10:15:00"
//! updated_at = "2024-07-10T08:00:00"
//! rating = 4
//! favorite = true
//! ```
//!
//! The query is what the parent container runs after the filter panel
//! changed its state; the panel never reads it.

use super::ordering::{sort_field, MediaOrdering, OrderDirection};
use super::rating::MinRating;
use crate::error::{Error, Result};
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::cmp::Ordering;
use std::fs;
use std::path::Path;

/// Kind of a media item, sorted by the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

/// A single photo or video in an album.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MediaItem {
    pub title: String,
    #[serde(default)]
    pub kind: MediaKind,
    #[serde(default)]
    pub date_shot: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
    /// Star rating, 0 when unrated.
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub favorite: bool,
}

/// An album loaded from a manifest.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Album {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub media: Vec<MediaItem>,
}

impl Album {
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let album: Album = toml::from_str(content)?;
        if let Some(item) = album.media.iter().find(|item| item.title.trim().is_empty()) {
            return Err(Error::Album(format!("media item with empty title: {item:?}")));
        }
        Ok(album)
    }
}

// =============================================================================
// Query
// =============================================================================

/// Field sorted by when the ordering leaves it unset.
pub const DEFAULT_SORT_FIELD: &str = sort_field::DATE_SHOT;

/// Ordering and filters applied to an album's media list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlbumQuery {
    pub ordering: MediaOrdering,
    pub min_rating: Option<MinRating>,
    pub only_favorites: bool,
}

impl AlbumQuery {
    /// Returns `true` if `item` passes the rating and favorites filters.
    #[must_use]
    pub fn matches(&self, item: &MediaItem) -> bool {
        if self.only_favorites && !item.favorite {
            return false;
        }
        self.min_rating.is_none_or(|min| min.admits(item.rating))
    }

    /// Filters then sorts `album`'s media.
    ///
    /// Sorting is stable; an unknown sort field keeps manifest order.
    #[must_use]
    pub fn apply<'a>(&self, album: &'a Album) -> Vec<&'a MediaItem> {
        let mut items: Vec<&MediaItem> = album.media.iter().filter(|i| self.matches(i)).collect();

        let field = self.ordering.order_by.as_deref().unwrap_or(DEFAULT_SORT_FIELD);
        let direction = self.ordering.order_direction.unwrap_or(OrderDirection::Asc);

        let Some(compare) = comparator(field) else {
            tracing::debug!(field, "unknown sort field, keeping manifest order");
            return items;
        };

        items.sort_by(|a, b| {
            let ord = compare(a, b);
            match direction {
                OrderDirection::Asc => ord,
                OrderDirection::Desc => ord.reverse(),
            }
        });
        items
    }
}

type Comparator = fn(&MediaItem, &MediaItem) -> Ordering;

fn comparator(field: &str) -> Option<Comparator> {
    match field {
        sort_field::DATE_SHOT => Some(by_date_shot as Comparator),
        sort_field::UPDATED_AT => Some(by_updated_at as Comparator),
        sort_field::TITLE => Some(by_title as Comparator),
        sort_field::TYPE => Some(by_kind as Comparator),
        _ => None,
    }
}

fn by_date_shot(a: &MediaItem, b: &MediaItem) -> Ordering {
    a.date_shot.cmp(&b.date_shot)
}

fn by_updated_at(a: &MediaItem, b: &MediaItem) -> Ordering {
    a.updated_at.cmp(&b.updated_at)
}

fn by_title(a: &MediaItem, b: &MediaItem) -> Ordering {
    a.title.to_lowercase().cmp(&b.title.to_lowercase())
}

fn by_kind(a: &MediaItem, b: &MediaItem) -> Ordering {
    a.kind.cmp(&b.kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"
title = "Summer"

[[media]]
title = "beach"
kind = "image"
date_shot = "2024-07-02T10:15:00"
updated_at = "2024-07-10T08:00:00"
rating = 4
favorite = true

[[media]]
title = "Ferry"
kind = "video"
date_shot = "2024-06-28T18:00:00"
updated_at = "2024-07-11T08:00:00"
rating = 5

[[media]]
title = "Attic"
date_shot = "2024-07-05T09:00:00"
updated_at = "2024-07-09T08:00:00"
rating = 2
"#;

    fn album() -> Album {
        Album::from_toml(MANIFEST).expect("manifest parses")
    }

    fn titles(items: &[&MediaItem]) -> Vec<String> {
        items.iter().map(|i| i.title.clone()).collect()
    }

    #[test]
    fn manifest_defaults_missing_fields() {
        let album = album();
        assert_eq!(album.title.as_deref(), Some("Summer"));
        assert_eq!(album.media.len(), 3);
        assert_eq!(album.media[2].kind, MediaKind::Image);
        assert!(!album.media[2].favorite);
    }

    #[test]
    fn manifest_rejects_empty_title() {
        let err = Album::from_toml("[[media]]\ntitle = \"  \"\n").unwrap_err();
        assert!(matches!(err, Error::Album(_)));
    }

    #[test]
    fn default_query_sorts_by_date_shot_ascending() {
        let album = album();
        let items = AlbumQuery::default().apply(&album);
        assert_eq!(titles(&items), ["Ferry", "beach", "Attic"]);
    }

    #[test]
    fn title_sort_ignores_case_and_honors_direction() {
        let album = album();
        let query = AlbumQuery {
            ordering: MediaOrdering::new(sort_field::TITLE, OrderDirection::Desc),
            ..AlbumQuery::default()
        };
        assert_eq!(titles(&query.apply(&album)), ["Ferry", "beach", "Attic"]);
    }

    #[test]
    fn type_sort_puts_images_first_when_ascending() {
        let album = album();
        let query = AlbumQuery {
            ordering: MediaOrdering::new(sort_field::TYPE, OrderDirection::Asc),
            ..AlbumQuery::default()
        };
        assert_eq!(titles(&query.apply(&album)), ["beach", "Attic", "Ferry"]);
    }

    #[test]
    fn updated_at_sort() {
        let album = album();
        let query = AlbumQuery {
            ordering: MediaOrdering::new(sort_field::UPDATED_AT, OrderDirection::Asc),
            ..AlbumQuery::default()
        };
        assert_eq!(titles(&query.apply(&album)), ["Attic", "beach", "Ferry"]);
    }

    #[test]
    fn min_rating_and_favorites_filter() {
        let album = album();
        let query = AlbumQuery {
            min_rating: MinRating::new(4),
            ..AlbumQuery::default()
        };
        assert_eq!(titles(&query.apply(&album)), ["Ferry", "beach"]);

        let query = AlbumQuery {
            only_favorites: true,
            ..query
        };
        assert_eq!(titles(&query.apply(&album)), ["beach"]);
    }

    #[test]
    fn unknown_field_keeps_manifest_order() {
        let album = album();
        let query = AlbumQuery {
            ordering: MediaOrdering::new("color", OrderDirection::Desc),
            ..AlbumQuery::default()
        };
        assert_eq!(titles(&query.apply(&album)), ["beach", "Ferry", "Attic"]);
    }
}
