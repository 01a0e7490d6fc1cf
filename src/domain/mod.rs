// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure value types shared by the panel and its host.
//!
//! Nothing here touches the filesystem or the UI toolkit, except for the
//! album manifest loader which is kept next to the type it builds.
//!
//! # Modules
//!
//! - [`ordering`]: Sort state ([`MediaOrdering`](ordering::MediaOrdering),
//!   [`OrderDirection`](ordering::OrderDirection),
//!   [`OrderingUpdate`](ordering::OrderingUpdate))
//! - [`rating`]: Minimum-rating thresholds ([`MinRating`](rating::MinRating))
//! - [`album`]: In-memory album and the query applying ordering and filters

pub mod album;
pub mod ordering;
pub mod rating;

pub use ordering::{MediaOrdering, OrderDirection, OrderingUpdate};
pub use rating::MinRating;
