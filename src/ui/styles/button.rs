// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{border, palette, radius};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Muted square button used for the sort direction toggle.
///
/// Light theme: near-white surface with a gray glyph that darkens on hover.
/// Dark theme: input-colored surface. The border turns blue while pressed.
pub fn direction_toggle(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (background, text_color, border_color) = match (is_light, status) {
        (true, button::Status::Hovered) => (palette::GRAY_100, palette::GRAY_600, palette::GRAY_200),
        (true, _) => (palette::GRAY_50, palette::GRAY_500, palette::GRAY_200),
        (false, button::Status::Hovered) => (
            palette::GRAY_700,
            palette::WHITE,
            palette::DARK_INPUT_BORDER,
        ),
        (false, _) => (
            palette::DARK_INPUT_BG,
            palette::DARK_INPUT_TEXT,
            palette::DARK_INPUT_BORDER,
        ),
    };

    let border_color = match status {
        button::Status::Pressed => palette::PRIMARY_300,
        _ => border_color,
    };

    let text_color = match status {
        button::Status::Disabled => Color {
            a: 0.5,
            ..text_color
        },
        _ => text_color,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: iced::Shadow::default(),
        snap: true,
    }
}
