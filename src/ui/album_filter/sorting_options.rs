// SPDX-License-Identifier: MPL-2.0
//! Sort field selector and sort direction toggle.

use crate::domain::ordering::{sort_field, MediaOrdering, OrderDirection, OrderingUpdate};
use crate::i18n::fluent::I18n;
use crate::ui::components::dropdown::{self, ItemSpec};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, container, text, tooltip, Column, Row};
use iced::{Element, Length};

/// Sort fields offered by the selector.
pub const SORTING_OPTIONS: [ItemSpec; 4] = [
    ItemSpec {
        value: sort_field::DATE_SHOT,
        key: "album_filter.sorting_options.date_shot",
        default_label: "Date shot",
    },
    ItemSpec {
        value: sort_field::UPDATED_AT,
        key: "album_filter.sorting_options.date_imported",
        default_label: "Date imported",
    },
    ItemSpec {
        value: sort_field::TITLE,
        key: "album_filter.sorting_options.title",
        default_label: "Title",
    },
    ItemSpec {
        value: sort_field::TYPE,
        key: "album_filter.sorting_options.type",
        default_label: "Kind",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A sort field was picked in the dropdown.
    OrderBySelected(String),
    /// The direction button was pressed.
    ToggleDirection,
}

/// Inputs of the sorting controls.
pub struct Props<'a, M> {
    pub ordering: Option<&'a MediaOrdering>,
    pub set_ordering: Option<fn(OrderingUpdate) -> M>,
}

impl<M> Clone for Props<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for Props<'_, M> {}

/// Accessible label of the direction button.
#[must_use]
pub fn direction_label(ordering: Option<&MediaOrdering>) -> &'static str {
    if arrow_flipped(ordering) {
        "ascending"
    } else {
        "descending"
    }
}

/// Whether the direction arrow is drawn flipped (pointing up).
#[must_use]
pub fn arrow_flipped(ordering: Option<&MediaOrdering>) -> bool {
    ordering.is_some_and(MediaOrdering::is_ascending)
}

/// Update requested by the direction button, or `None` without an ordering.
#[must_use]
pub fn toggle_update(ordering: Option<&MediaOrdering>) -> Option<OrderingUpdate> {
    ordering.map(|o| OrderingUpdate::SetOrderDirection(OrderDirection::toggled(o.order_direction)))
}

/// Turns an interaction into the parent's message.
///
/// Returns `None` when the parent supplied no setter, or when the direction
/// is toggled without an ordering.
pub fn dispatch<M>(props: Props<'_, M>, message: Message) -> Option<M> {
    let Some(set_ordering) = props.set_ordering else {
        tracing::debug!(?message, "no ordering setter, ignoring");
        return None;
    };

    let update = match message {
        Message::OrderBySelected(value) => Some(OrderingUpdate::SetOrderBy(value)),
        Message::ToggleDirection => toggle_update(props.ordering),
    };
    update.map(set_ordering)
}

pub fn view<'a, M>(i18n: &I18n, props: Props<'a, M>) -> Element<'a, Message> {
    let legend = Row::new()
        .spacing(spacing::XXS)
        .align_y(Vertical::Center)
        .push(icons::sorting())
        .push(text(i18n.tr_or("album_filter.sort", "Sort")).size(typography::BODY_SM));

    let field_selector = dropdown::dropdown(
        dropdown::resolve_items(&SORTING_OPTIONS, i18n),
        props.ordering.and_then(|o| o.order_by.as_deref()),
        Message::OrderBySelected,
        None,
        sizing::SORT_DROPDOWN_WIDTH,
    );

    let controls = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(field_selector)
        .push(direction_button(i18n, props));

    Column::new()
        .spacing(spacing::XXS)
        .push(legend)
        .push(controls)
        .into()
}

fn direction_button<'a, M>(i18n: &I18n, props: Props<'a, M>) -> Element<'a, Message> {
    // Always pressable; `dispatch` drops the press without ordering or setter.
    let icon = container(icons::direction(arrow_flipped(props.ordering)))
        .center_x(Length::Fill)
        .center_y(Length::Fill);

    let toggle = button(icon)
        .on_press(Message::ToggleDirection)
        .width(Length::Fixed(sizing::CONTROL_HEIGHT))
        .height(Length::Fixed(sizing::CONTROL_HEIGHT))
        .padding(spacing::XXS)
        .style(styles::button::direction_toggle);

    let title = i18n.tr_or("album_filter.sort_direction", "Sort direction");
    let hint = format!("{title}: {}", direction_label(props.ordering));

    tooltip(toggle, text(hint).size(typography::BODY_SM), tooltip::Position::Bottom)
        .gap(spacing::XXS)
        .into()
}
