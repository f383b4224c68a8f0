//! Anchored popover overlay.

use iced::widget::{column, container, mouse_area, opaque, stack};
use iced::{Element, Length, Padding, Theme};

use crate::theme::{GalleryColors, POPOVER_WIDTH, SPACING_MD, container_popover};

/// Shows `content` in a card over `base`, offset from its top-left corner.
///
/// Clicking anywhere outside the card sends `on_dismiss`. The backdrop is
/// opaque to input, so the table underneath cannot be changed while the
/// popover is open.
///
/// # Example
///
/// ```rust,ignore
/// popover(table_view, form, [48.0, 16.0], Message::Bulk(BulkMessage::Close))
/// ```
pub fn popover<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    content: Element<'a, M>,
    offset: [f32; 2],
    on_dismiss: M,
) -> Element<'a, M> {
    let backdrop = mouse_area(
        container(column![])
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|theme: &Theme| container::Style {
                background: Some(theme.gallery().backdrop.into()),
                ..Default::default()
            }),
    )
    .on_press(on_dismiss);

    let card = container(content)
        .width(Length::Fixed(POPOVER_WIDTH))
        .padding(SPACING_MD)
        .style(container_popover);

    let [top, left] = offset;
    let anchored = container(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top,
            right: 0.0,
            bottom: 0.0,
            left,
        });

    // Stack layers: base -> backdrop -> card
    stack![base, opaque(backdrop), anchored].into()
}
