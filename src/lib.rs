// SPDX-License-Identifier: MPL-2.0
//! `album_lens` is an album browser built with the Iced GUI framework.
//!
//! Its centerpiece is the album filter panel: a sort field selector with a
//! direction toggle, a minimum-rating selector and, for authenticated
//! sessions, a favorites-only checkbox. The panel is stateless and reports
//! changes through setters supplied by its host.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod session;
pub mod ui;
