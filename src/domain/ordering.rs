// SPDX-License-Identifier: MPL-2.0
//! Sort state of an album's media list.
//!
//! The parent container owns a [`MediaOrdering`] and receives partial
//! changes as [`OrderingUpdate`] values. Merging an update only replaces the
//! field it names; the other field keeps its previous value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable keys of the fields an album can be sorted by.
pub mod sort_field {
    pub const DATE_SHOT: &str = "date_shot";
    pub const UPDATED_AT: &str = "updated_at";
    pub const TITLE: &str = "title";
    pub const TYPE: &str = "type";
}

// =============================================================================
// Order Direction
// =============================================================================

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl OrderDirection {
    /// Direction produced by the toggle button.
    ///
    /// Only `Asc` flips to `Desc`; an undefined direction is handled like
    /// `Desc` and flips to `Asc`.
    #[must_use]
    pub fn toggled(current: Option<Self>) -> Self {
        match current {
            Some(Self::Asc) => Self::Desc,
            Some(Self::Desc) | None => Self::Asc,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Ordering
// =============================================================================

/// Current sort field and direction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MediaOrdering {
    /// Sort field key (see [`sort_field`]). `None` lets the query pick.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    /// Sort direction. `None` lets the query pick.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_direction: Option<OrderDirection>,
}

impl MediaOrdering {
    #[must_use]
    pub fn new(order_by: impl Into<String>, order_direction: OrderDirection) -> Self {
        Self {
            order_by: Some(order_by.into()),
            order_direction: Some(order_direction),
        }
    }

    /// Returns `true` when the direction is explicitly ascending.
    #[must_use]
    pub fn is_ascending(&self) -> bool {
        self.order_direction == Some(OrderDirection::Asc)
    }

    /// Merges a partial update into this ordering.
    pub fn apply(&mut self, update: OrderingUpdate) {
        match update {
            OrderingUpdate::SetOrderBy(field) => self.order_by = Some(field),
            OrderingUpdate::SetOrderDirection(direction) => {
                self.order_direction = Some(direction);
            }
        }
    }

    /// Returns a copy with `update` merged in.
    #[must_use]
    pub fn merged(&self, update: OrderingUpdate) -> Self {
        let mut next = self.clone();
        next.apply(update);
        next
    }
}

/// Partial change requested by the sorting controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderingUpdate {
    SetOrderBy(String),
    SetOrderDirection(OrderDirection),
}
