// SPDX-License-Identifier: MPL-2.0
//! SVG icons used by the album filter.
//!
//! Sources live in `assets/icons/` and are embedded with `include_bytes!`.
//! Handles are cached in a `OnceLock` so the SVG is parsed once.

use crate::ui::design_tokens::sizing;
use iced::widget::svg::{self, Handle, Svg};
use iced::{Length, Radians, Rotation, Theme};
use std::sync::OnceLock;

macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
                .width(Length::Fixed(sizing::ICON_SM))
                .height(Length::Fixed(sizing::ICON_SM))
                .style(muted)
        }
    };
}

define_icon!(sorting, "sorting.svg", "Sorting legend icon: arrow next to bars.");
define_icon!(
    direction_arrow,
    "direction-arrow.svg",
    "Sort direction icon: arrow pointing down."
);

/// Direction arrow, pointing up when `ascending`.
pub fn direction<'a>(ascending: bool) -> Svg<'a> {
    let arrow = direction_arrow();
    if ascending {
        arrow.rotation(Rotation::Solid(Radians::PI))
    } else {
        arrow
    }
}

fn muted(theme: &Theme, _status: svg::Status) -> svg::Style {
    svg::Style {
        color: Some(theme.extended_palette().background.strong.text),
    }
}
