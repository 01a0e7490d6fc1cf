// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The album screen is the filter panel on top of the filtered media list.

use super::Message;
use crate::domain::album::{Album, MediaItem, MediaKind};
use crate::i18n::fluent::I18n;
use crate::ui::album_filter;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use fluent_bundle::FluentValue;
use iced::alignment::Vertical;
use iced::widget::{container, scrollable, text, Column, Container, Row};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub filter: album_filter::ViewContext<'a, Message>,
    pub album: Option<&'a Album>,
    /// Media left after the query ran, in display order.
    pub media: Vec<&'a MediaItem>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let heading = ctx
        .album
        .and_then(|album| album.title.clone())
        .unwrap_or_else(|| ctx.i18n.tr("window-title"));

    let count = ctx.i18n.tr_with_args(
        "album-media-count",
        &[("count", FluentValue::from(ctx.media.len()))],
    );

    let content = Column::new()
        .spacing(spacing::MD)
        .push(text(heading).size(typography::TITLE_MD))
        .push(album_filter::view(&ctx.filter).map(Message::AlbumFilter))
        .push(text(count).size(typography::BODY_SM))
        .push(media_list(ctx.i18n, &ctx.media));

    Container::new(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn media_list<'a>(i18n: &I18n, media: &[&'a MediaItem]) -> Element<'a, Message> {
    if media.is_empty() {
        return container(text(i18n.tr("album-empty")).size(typography::BODY))
            .center_x(Length::Fill)
            .padding(spacing::LG)
            .into();
    }

    let cards = media
        .iter()
        .fold(Column::new().spacing(spacing::XS), |column, item| {
            column.push(media_card(item))
        });

    scrollable(cards).height(Length::Fill).into()
}

fn media_card<'a>(item: &'a MediaItem) -> Element<'a, Message> {
    let kind = match item.kind {
        MediaKind::Image => "image",
        MediaKind::Video => "video",
    };
    let shot = item
        .date_shot
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let favorite = if item.favorite { "♥" } else { "" };

    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(text(item.title.as_str()).size(typography::BODY).width(Length::Fill))
        .push(text(kind).size(typography::BODY_SM))
        .push(text(shot).size(typography::BODY_SM))
        .push(text(stars(item.rating)).size(typography::BODY_SM))
        .push(text(favorite).size(typography::BODY_SM));

    container(row)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(styles::container::media_card)
        .into()
}

/// Star string for a 0-5 rating.
fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}
