//! The artwork table card: checkboxes, rows, pagination and the bulk popover.

use iced::widget::{button, checkbox, column, container, row, rule};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use artview_model::{ArtworkRecord, NO_INSCRIPTIONS, PageIndex, TABLE_HEADERS};

use crate::component::{
    EmptyState, ErrorState, LoadingState, TableColumn, TableRow, data_table, popover,
};
use crate::message::{BulkMessage, Message, TableMessage};
use crate::state::AppState;
use crate::theme::{GalleryColors, SPACING_XS, TABLE_CELL_PADDING_Y, button_ghost, container_card};

use super::bulk_popover::view_bulk_form;
use super::pagination::view_pagination;

/// Column index of the inscriptions cell.
const INSCRIPTIONS_COLUMN: usize = 5;

/// Table, pagination bar and, when open, the bulk-select popover.
pub fn view_table_card(state: &AppState) -> Element<'_, Message> {
    let card: Element<'_, Message> = container(
        column![
            view_table_body(state),
            rule::horizontal(1).style(|theme: &Theme| rule::Style {
                color: theme.gallery().border_default,
                radius: 0.0.into(),
                fill_mode: rule::FillMode::Full,
                snap: true,
            }),
            view_pagination(state.table.pagination()),
        ]
        .spacing(0),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(container_card)
    .into();

    if state.bulk.open {
        // Just below the header row, aligned with the checkbox column.
        let top = 2.0 * TABLE_CELL_PADDING_Y + 24.0;
        popover(
            card,
            view_bulk_form(state),
            [top, SPACING_XS],
            Message::Bulk(BulkMessage::Close),
        )
    } else {
        card
    }
}

fn view_table_body(state: &AppState) -> Element<'_, Message> {
    let table = &state.table;

    if state.client.is_none() {
        let mut error = ErrorState::new("Cannot reach the artwork service");
        if let Some(reason) = &state.error {
            error = error.message(reason.to_string());
        }
        return error.view();
    }

    if table.records().is_empty() {
        if table.is_loading() {
            return LoadingState::new("Loading artworks").view();
        }
        let mut empty = EmptyState::new(
            container(lucide::table().size(40)).style(|theme: &Theme| container::Style {
                text_color: Some(theme.gallery().text_disabled),
                ..Default::default()
            }),
            "No artworks on this page",
        );
        if table.current_page() != PageIndex::FIRST {
            empty = empty
                .description(format!("{} is past the end of the collection", table.current_page()))
                .action("First page", Message::Table(TableMessage::FirstPage));
        }
        return empty.view();
    }

    let columns = table_columns();
    let interactive = !table.is_loading();
    let rows = table
        .records()
        .iter()
        .map(|record| record_row(record, table.is_selected(record), interactive))
        .collect();

    data_table(&columns, header_controls(state), rows)
}

fn table_columns() -> Vec<TableColumn> {
    let [title, artist, origin, start, end, inscriptions] = TABLE_HEADERS;
    vec![
        TableColumn::portion(title, 3),
        TableColumn::portion(artist, 3),
        TableColumn::portion(origin, 2),
        TableColumn::fixed(start, 72.0),
        TableColumn::fixed(end, 72.0),
        TableColumn::portion(inscriptions, 3),
    ]
}

/// Select-all checkbox plus the chevron that opens the bulk popover.
fn header_controls(state: &AppState) -> Element<'_, Message> {
    let table = &state.table;
    let interactive = !table.is_loading();
    let fully_selected = table.is_page_fully_selected();

    let select_all = checkbox(fully_selected).on_toggle_maybe(
        interactive.then_some(|select| Message::Table(TableMessage::SelectAllToggled(select))),
    );

    let can_bulk = interactive && !table.is_bulk_in_flight();
    let chevron = button(lucide::chevron_down().size(12))
        .on_press_maybe(can_bulk.then_some(Message::Bulk(BulkMessage::Toggle)))
        .padding([2.0, 4.0])
        .style(button_ghost);

    row![select_all, chevron]
        .spacing(SPACING_XS)
        .align_y(Alignment::Center)
        .into()
}

fn record_row(record: &ArtworkRecord, selected: bool, interactive: bool) -> TableRow<'_, Message> {
    let id = record.id;
    let toggle = checkbox(selected).on_toggle_maybe(
        interactive.then_some(move |_| Message::Table(TableMessage::RowToggled(id))),
    );

    let row = TableRow::new(toggle, record.table_cells().into()).selected(selected);
    if record.inscriptions_or_default() == NO_INSCRIPTIONS {
        row.muted(INSCRIPTIONS_COLUMN)
    } else {
        row
    }
}
