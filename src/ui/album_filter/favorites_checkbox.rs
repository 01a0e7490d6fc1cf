// SPDX-License-Identifier: MPL-2.0
//! "Show only favorites" checkbox.
//!
//! Visibility is decided by the parent row; this control always renders
//! and always reports.

use crate::i18n::fluent::I18n;
use crate::ui::components::checkbox::labeled_checkbox;
use iced::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The checkbox changed to the carried state.
    Toggled(bool),
}

/// Inputs of the favorites checkbox. Both are required.
pub struct Props<M> {
    pub only_favorites: bool,
    pub set_only_favorites: fn(bool) -> M,
}

impl<M> Clone for Props<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for Props<M> {}

pub fn dispatch<M>(props: Props<M>, message: Message) -> M {
    let Message::Toggled(checked) = message;
    (props.set_only_favorites)(checked)
}

pub fn view<'a, M>(i18n: &I18n, props: Props<M>) -> Element<'a, Message> {
    labeled_checkbox(
        i18n.tr_or("album_filter.only_favorites", "Show only favorites"),
        props.only_favorites,
        Message::Toggled,
    )
}
