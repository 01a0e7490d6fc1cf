// SPDX-License-Identifier: MPL-2.0
//! Minimum-rating filter thresholds.

use std::fmt;
use std::num::ParseIntError;

/// Thresholds offered by the rating dropdown, highest first.
pub const THRESHOLDS: [u8; 3] = [5, 4, 3];

/// A minimum rating the album can be filtered by.
///
/// Only the values in [`THRESHOLDS`] can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MinRating(u8);

impl MinRating {
    /// Returns `None` for values outside [`THRESHOLDS`].
    #[must_use]
    pub fn new(value: u8) -> Option<Self> {
        THRESHOLDS.contains(&value).then_some(Self(value))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns `true` if a media item with `rating` passes this threshold.
    #[must_use]
    pub fn admits(self, rating: u8) -> bool {
        rating >= self.0
    }
}

impl fmt::Display for MinRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses a dropdown value as a base-10 integer.
///
/// The value is not checked against [`THRESHOLDS`]; the setter receives the
/// parsed integer as-is.
pub fn parse_rating(value: &str) -> Result<u8, ParseIntError> {
    value.trim().parse::<u8>()
}
