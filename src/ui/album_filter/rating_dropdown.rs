// SPDX-License-Identifier: MPL-2.0
//! Minimum-rating selector.

use crate::domain::rating::parse_rating;
use crate::i18n::fluent::I18n;
use crate::ui::components::dropdown::{self, ItemSpec};
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{text, Column};
use iced::Element;

/// Rating thresholds offered by the selector, highest first.
pub const RATING_OPTIONS: [ItemSpec; 3] = [
    ItemSpec {
        value: "5",
        key: "album_filter.rating_options.5",
        default_label: "5",
    },
    ItemSpec {
        value: "4",
        key: "album_filter.rating_options.at_least_4",
        default_label: "at least 4",
    },
    ItemSpec {
        value: "3",
        key: "album_filter.rating_options.at_least_3",
        default_label: "at least 3",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The dropdown value of the picked option.
    Selected(String),
}

/// Inputs of the rating selector.
pub struct Props<M> {
    pub min_rating: Option<u8>,
    pub set_min_rating: Option<fn(u8) -> M>,
}

impl<M> Clone for Props<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for Props<M> {}

/// Turns a selection into the parent's message.
///
/// The value is parsed as a base-10 integer. Without a setter, or if the
/// value does not parse, nothing is produced.
pub fn dispatch<M>(props: Props<M>, message: Message) -> Option<M> {
    let Message::Selected(value) = message;

    let Some(set_min_rating) = props.set_min_rating else {
        tracing::debug!(value = %value, "no rating setter, ignoring");
        return None;
    };

    match parse_rating(&value) {
        Ok(rating) => Some(set_min_rating(rating)),
        Err(err) => {
            tracing::warn!(value = %value, error = %err, "ignoring unparsable rating");
            None
        }
    }
}

pub fn view<'a, M>(i18n: &I18n, props: Props<M>) -> Element<'a, Message> {
    let legend = text(i18n.tr_or("album_filter.rating", "Rating")).size(typography::BODY_SM);

    let current = props.min_rating.map(|rating| rating.to_string());
    let selector = dropdown::dropdown(
        dropdown::resolve_items(&RATING_OPTIONS, i18n),
        current.as_deref(),
        Message::Selected,
        Some(i18n.tr_or("album_filter.rating_options.placeholder", "Select rating")),
        sizing::RATING_DROPDOWN_WIDTH,
    );

    Column::new()
        .spacing(spacing::XXS)
        .push(legend)
        .push(selector)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Parent {
        SetMinRating(u8),
    }

    fn props(min_rating: Option<u8>) -> Props<Parent> {
        Props {
            min_rating,
            set_min_rating: Some(Parent::SetMinRating),
        }
    }

    #[test]
    fn selecting_four_sets_integer_four() {
        assert_eq!(
            dispatch(props(None), Message::Selected("4".into())),
            Some(Parent::SetMinRating(4))
        );
    }

    #[test]
    fn every_option_parses_to_its_threshold() {
        for (option, expected) in RATING_OPTIONS.iter().zip([5, 4, 3]) {
            assert_eq!(
                dispatch(props(Some(3)), Message::Selected(option.value.into())),
                Some(Parent::SetMinRating(expected))
            );
        }
    }

    #[test]
    fn missing_setter_ignores_selection() {
        let props: Props<Parent> = Props {
            min_rating: Some(4),
            set_min_rating: None,
        };
        assert_eq!(dispatch(props, Message::Selected("5".into())), None);
    }

    #[test]
    fn unparsable_value_is_ignored() {
        assert_eq!(dispatch(props(None), Message::Selected("five".into())), None);
    }
}
