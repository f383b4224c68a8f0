//! Side panel listing every selected record across pages.

use iced::widget::{button, column, container, row, rule, scrollable, space, text};
use iced::{Alignment, Element, Length, Theme};

use crate::message::{Message, TableMessage};
use crate::state::AppState;
use crate::theme::{
    GalleryColors, SELECTION_PANEL_WIDTH, SPACING_MD, SPACING_SM, SPACING_XS, button_secondary,
    container_sidebar,
};

pub fn view_selection_panel(state: &AppState) -> Element<'_, Message> {
    let selection = state.table.selection();
    let count = selection.selected_count();

    let heading = row![
        text("Selected rows").size(14),
        space::horizontal(),
        text(count.to_string())
            .size(13)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.gallery().text_muted),
            }),
    ]
    .align_y(Alignment::Center);

    let body: Element<'_, Message> = if selection.is_empty() {
        container(
            text("Tick rows in the table, or use the arrow next to the header checkbox to select many at once.")
                .size(12)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.gallery().text_muted),
                }),
        )
        .height(Length::Fill)
        .into()
    } else {
        let mut list = column![].spacing(SPACING_SM);
        for (page, record) in selection.selected_records() {
            list = list.push(
                column![
                    text(record.title.as_str()).size(13),
                    text(format!("{page} - {}", record.artist_display))
                        .size(11)
                        .style(|theme: &Theme| text::Style {
                            color: Some(theme.gallery().text_muted),
                        }),
                ]
                .spacing(SPACING_XS),
            );
        }
        scrollable(list).height(Length::Fill).into()
    };

    let clear = button(text("Clear selection").size(13))
        .on_press_maybe((count > 0).then_some(Message::Table(TableMessage::ClearSelection)))
        .width(Length::Fill)
        .padding([6.0, 12.0])
        .style(button_secondary);

    container(
        column![
            heading,
            rule::horizontal(1).style(|theme: &Theme| rule::Style {
                color: theme.gallery().border_subtle,
                radius: 0.0.into(),
                fill_mode: rule::FillMode::Full,
                snap: true,
            }),
            body,
            clear,
        ]
        .spacing(SPACING_MD),
    )
    .width(Length::Fixed(SELECTION_PANEL_WIDTH))
    .height(Length::Fill)
    .padding(SPACING_MD)
    .style(container_sidebar)
    .into()
}
