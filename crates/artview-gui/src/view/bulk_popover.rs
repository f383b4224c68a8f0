//! "Select N rows" form shown in the bulk popover.

use iced::widget::{button, column, row, space, text, text_input};
use iced::{Element, Theme};

use crate::message::{BulkMessage, Message};
use crate::state::AppState;
use crate::theme::{
    GalleryColors, SPACING_SM, SPACING_XS, button_primary, button_secondary, text_input_default,
};

pub fn view_bulk_form(state: &AppState) -> Element<'_, Message> {
    let in_flight = state.table.is_bulk_in_flight();
    let start = state.table.current_page();

    let hint = text(format!("Starting at row 1 of {start}, continuing onto later pages"))
        .size(12)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.gallery().text_muted),
        });

    let mut input = text_input("Number of rows", &state.bulk.input)
        .padding(SPACING_SM)
        .size(14)
        .style(text_input_default);
    if !in_flight {
        input = input
            .on_input(|value| Message::Bulk(BulkMessage::CountChanged(value)))
            .on_submit(Message::Bulk(BulkMessage::Submit));
    }

    let mut form = column![text("Select rows").size(14), hint, input].spacing(SPACING_SM);

    if let Some(error) = &state.bulk.error {
        form = form.push(text(error.to_string()).size(12).style(|theme: &Theme| {
            text::Style {
                color: Some(theme.extended_palette().danger.base.color),
            }
        }));
    }

    let submit_label = if in_flight { "Selecting..." } else { "Submit" };
    let actions = row![
        space::horizontal(),
        button(text("Cancel").size(13))
            .on_press(Message::Bulk(BulkMessage::Close))
            .padding([6.0, 12.0])
            .style(button_secondary),
        button(text(submit_label).size(13))
            .on_press_maybe((!in_flight).then_some(Message::Bulk(BulkMessage::Submit)))
            .padding([6.0, 12.0])
            .style(button_primary),
    ]
    .spacing(SPACING_XS);

    form.push(actions).into()
}
