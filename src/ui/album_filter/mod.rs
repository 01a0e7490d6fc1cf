// SPDX-License-Identifier: MPL-2.0
//! Filter and sort panel shown above an album's media list.
//!
//! The panel is stateless. The parent passes the current ordering, rating
//! threshold and favorites flag together with optional setters, renders
//! [`view`] mapped into its own message type, and routes the resulting
//! [`Message`]s back through [`dispatch`], which returns the parent message
//! built by the matching setter.
//!
//! ```ignore
//! // view
//! album_filter::view(&ctx).map(Message::AlbumFilter)
//!
//! // update
//! Message::AlbumFilter(msg) => {
//!     if let Some(next) = album_filter::dispatch(&ctx, msg) {
//!         return self.update(next);
//!     }
//! }
//! ```
//!
//! A missing setter silently disables the matching interaction.

pub mod favorites_checkbox;
pub mod rating_dropdown;
pub mod sorting_options;

use crate::domain::ordering::{MediaOrdering, OrderingUpdate};
use crate::i18n::fluent::I18n;
use crate::session::Authentication;
use crate::ui::design_tokens::spacing;
use iced::alignment::Vertical;
use iced::widget::Row;
use iced::Element;

// =============================================================================
// Messages
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Sorting(sorting_options::Message),
    Rating(rating_dropdown::Message),
    Favorites(favorites_checkbox::Message),
}

/// Controls the panel can render, in layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    SortingOptions,
    RatingDropdown,
    FavoritesCheckbox,
}

// =============================================================================
// View Context
// =============================================================================

/// Everything the panel reads, borrowed from the parent.
pub struct ViewContext<'a, M> {
    pub i18n: &'a I18n,
    pub session: &'a dyn Authentication,
    pub only_favorites: bool,
    pub set_only_favorites: Option<fn(bool) -> M>,
    pub ordering: Option<&'a MediaOrdering>,
    pub set_ordering: Option<fn(OrderingUpdate) -> M>,
    pub min_rating: Option<u8>,
    pub set_min_rating: Option<fn(u8) -> M>,
}

impl<'a, M> ViewContext<'a, M> {
    /// A context with every optional input absent.
    pub fn new(i18n: &'a I18n, session: &'a dyn Authentication, only_favorites: bool) -> Self {
        Self {
            i18n,
            session,
            only_favorites,
            set_only_favorites: None,
            ordering: None,
            set_ordering: None,
            min_rating: None,
            set_min_rating: None,
        }
    }

    fn sorting(&self) -> sorting_options::Props<'a, M> {
        sorting_options::Props {
            ordering: self.ordering,
            set_ordering: self.set_ordering,
        }
    }

    fn rating(&self) -> rating_dropdown::Props<M> {
        rating_dropdown::Props {
            min_rating: self.min_rating,
            set_min_rating: self.set_min_rating,
        }
    }

    /// Props of the favorites checkbox, present only when it is shown.
    fn favorites(&self) -> Option<favorites_checkbox::Props<M>> {
        if !self.session.is_authenticated() {
            return None;
        }
        self.set_only_favorites
            .map(|set_only_favorites| favorites_checkbox::Props {
                only_favorites: self.only_favorites,
                set_only_favorites,
            })
    }
}

/// Controls rendered for `ctx`.
///
/// Sorting and rating are always present. The favorites checkbox needs both
/// a session credential and a favorites setter.
pub fn controls<M>(ctx: &ViewContext<'_, M>) -> Vec<Control> {
    let mut controls = vec![Control::SortingOptions, Control::RatingDropdown];
    if ctx.favorites().is_some() {
        controls.push(Control::FavoritesCheckbox);
    }
    controls
}

// =============================================================================
// Update
// =============================================================================

/// Turns a panel interaction into the parent's message.
///
/// Returns `None` when the matching setter is absent or the interaction has
/// no effect (e.g. toggling direction with no ordering).
pub fn dispatch<M>(ctx: &ViewContext<'_, M>, message: Message) -> Option<M> {
    match message {
        Message::Sorting(message) => sorting_options::dispatch(ctx.sorting(), message),
        Message::Rating(message) => rating_dropdown::dispatch(ctx.rating(), message),
        Message::Favorites(message) => match ctx.favorites() {
            Some(props) => Some(favorites_checkbox::dispatch(props, message)),
            None => {
                tracing::debug!(?message, "favorites control hidden, ignoring");
                None
            }
        },
    }
}

// =============================================================================
// View
// =============================================================================

pub fn view<'a, M>(ctx: &ViewContext<'a, M>) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Bottom)
        .push(sorting_options::view(ctx.i18n, ctx.sorting()).map(Message::Sorting))
        .push(rating_dropdown::view(ctx.i18n, ctx.rating()).map(Message::Rating));

    if let Some(props) = ctx.favorites() {
        row = row.push(favorites_checkbox::view(ctx.i18n, props).map(Message::Favorites));
    }

    row.wrap().vertical_spacing(spacing::XS).into()
}
