// SPDX-License-Identifier: MPL-2.0
//! Generic labeled select control.
//!
//! Items carry a stable `value` and a display `label`. The control reports
//! the selected item's `value`, never its label, so callers stay independent
//! of the active locale.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::pick_list;
use iced::{Element, Length};
use std::fmt;

/// A selectable `{value, label}` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownItem {
    pub value: String,
    pub label: String,
}

impl fmt::Display for DropdownItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Compile-time description of a dropdown item whose label is translated
/// at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSpec {
    pub value: &'static str,
    /// Dotted translation key, e.g. `album_filter.sorting_options.title`.
    pub key: &'static str,
    /// English text used when the key has no translation.
    pub default_label: &'static str,
}

impl ItemSpec {
    #[must_use]
    pub fn resolve(&self, i18n: &I18n) -> DropdownItem {
        DropdownItem {
            value: self.value.to_string(),
            label: i18n.tr_or(self.key, self.default_label),
        }
    }
}

/// Resolves a whole option table.
#[must_use]
pub fn resolve_items(specs: &[ItemSpec], i18n: &I18n) -> Vec<DropdownItem> {
    specs.iter().map(|spec| spec.resolve(i18n)).collect()
}

/// Renders a select over `items` with `value` preselected.
///
/// An unknown or absent `value` shows the placeholder (if any).
pub fn dropdown<'a, Message, F>(
    items: Vec<DropdownItem>,
    value: Option<&str>,
    on_select: F,
    placeholder: Option<String>,
    width: f32,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
    F: Fn(String) -> Message + 'a,
{
    let selected = value.and_then(|v| items.iter().find(|item| item.value == v).cloned());

    let mut list = pick_list(items, selected, move |item: DropdownItem| on_select(item.value))
        .text_size(typography::BODY)
        .padding([spacing::XXS, spacing::XS])
        .width(Length::Fixed(width));

    if let Some(placeholder) = placeholder {
        list = list.placeholder(placeholder);
    }

    list.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    const SPECS: [ItemSpec; 2] = [
        ItemSpec {
            value: "title",
            key: "album_filter.sorting_options.title",
            default_label: "Title",
        },
        ItemSpec {
            value: "missing",
            key: "album_filter.sorting_options.not_translated",
            default_label: "Fallback label",
        },
    ];

    #[test]
    fn resolve_items_keeps_values_and_translates_labels() {
        let i18n = I18n::new(Some("fr".to_string()), &Config::default());
        let items = resolve_items(&SPECS, &i18n);

        assert_eq!(items[0].value, "title");
        assert_eq!(items[0].label, "Titre");
        assert_eq!(items[1].label, "Fallback label");
    }

    #[test]
    fn display_shows_label() {
        let item = DropdownItem {
            value: "4".into(),
            label: "at least 4".into(),
        };
        assert_eq!(item.to_string(), "at least 4");
    }
}
