// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: they
//! render from borrowed state and emit their own messages, which the host
//! maps into its own.
//!
//! - [`album_filter`] - Sort, rating and favorites controls above an album
//! - [`components`] - Reusable primitives (dropdown, checkbox)
//! - [`styles`] - Centralized widget styling
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - SVG icon loading

pub mod album_filter;
pub mod components;
pub mod design_tokens;
pub mod icons;
pub mod styles;
