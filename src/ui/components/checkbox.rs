// SPDX-License-Identifier: MPL-2.0
//! Labeled checkbox primitive.

use crate::ui::design_tokens::{spacing, typography};
use iced::widget::checkbox;
use iced::Element;

/// Renders a checkbox that reports its new checked state through `on_change`.
pub fn labeled_checkbox<'a, Message, F>(
    label: String,
    checked: bool,
    on_change: F,
) -> Element<'a, Message>
where
    Message: 'a,
    F: Fn(bool) -> Message + 'a,
{
    checkbox(checked)
        .label(label)
        .on_toggle(on_change)
        .text_size(typography::BODY)
        .spacing(spacing::XS)
        .into()
}
