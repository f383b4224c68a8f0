//! View functions.
//!
//! Views are pure: they read [`AppState`] and return elements; every change
//! goes through a [`Message`].

mod bulk_popover;
mod header;
mod pagination;
mod selection_panel;
mod status;
mod table;

use iced::widget::{column, row};
use iced::{Element, Length};

use crate::message::Message;
use crate::state::AppState;
use crate::theme::{SPACING_LG, SPACING_MD};

/// Root view.
pub fn view_app(state: &AppState) -> Element<'_, Message> {
    let mut content = column![header::view_header(state)].spacing(SPACING_MD);

    if let Some(error) = state.table.pagination().error() {
        content = content.push(status::view_fetch_error(error));
    }

    content = content.push(
        row![
            table::view_table_card(state),
            selection_panel::view_selection_panel(state),
        ]
        .spacing(SPACING_MD)
        .height(Length::Fill),
    );

    if let Some(bar) = status::view_status_bar(state) {
        content = content.push(bar);
    }

    content
        .padding(SPACING_LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
