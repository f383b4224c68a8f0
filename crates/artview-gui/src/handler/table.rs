//! Table handler: pagination, row and header checkboxes.

use iced::Task;

use artview_core::PageTicket;
use artview_model::{FetchedPage, PageIndex};
use artview_source::SourceError;

use crate::handler::MessageHandler;
use crate::message::{Message, TableMessage};
use crate::service;
use crate::state::AppState;

/// Handler for [`TableMessage`].
pub struct TableHandler;

impl MessageHandler<TableMessage> for TableHandler {
    fn handle(&self, state: &mut AppState, msg: TableMessage) -> Task<Message> {
        let pagination = state.table.pagination();
        match msg {
            TableMessage::FirstPage => load_page(state, PageIndex::FIRST),
            TableMessage::PreviousPage => {
                if !pagination.has_previous() {
                    return Task::none();
                }
                let page = pagination.current_page().previous();
                load_page(state, page)
            }
            TableMessage::NextPage => {
                if !pagination.has_next() {
                    return Task::none();
                }
                let page = pagination.current_page().next();
                load_page(state, page)
            }
            TableMessage::GoToPage(page) => {
                if page == pagination.current_page() || page > pagination.last_page() {
                    return Task::none();
                }
                load_page(state, page)
            }
            TableMessage::LastPage => {
                let page = pagination.last_page();
                load_page(state, page)
            }
            TableMessage::RowToggled(id) => {
                if state.table.toggle_record(id).is_none() {
                    tracing::debug!(id = %id, "Toggle ignored: record not on a loaded page");
                }
                Task::none()
            }
            TableMessage::SelectAllToggled(select) => {
                state.table.toggle_select_all(select);
                Task::none()
            }
            TableMessage::ClearSelection => {
                state.table.clear_selection();
                state.status = None;
                Task::none()
            }
            TableMessage::Retry => {
                let page = pagination.current_page();
                load_page(state, page)
            }
            TableMessage::DismissError => {
                state.table.dismiss_error();
                Task::none()
            }
        }
    }
}

/// Request `page` and fetch it in the background.
///
/// Responses come back as [`Message::PageLoaded`] carrying the ticket, so a
/// late answer for an earlier request is dropped.
pub fn load_page(state: &mut AppState, page: PageIndex) -> Task<Message> {
    let Some(client) = state.client.clone() else {
        tracing::warn!(page = page.get(), "No artwork client, page not requested");
        return Task::none();
    };

    let ticket = state.table.request_page(page);
    Task::perform(service::fetch_page(client, page), move |result| {
        Message::PageLoaded { ticket, result }
    })
}

/// Apply a finished page fetch.
pub fn apply_page_result(
    state: &mut AppState,
    ticket: PageTicket,
    result: Result<FetchedPage, SourceError>,
) {
    match result {
        Ok(fetched) => {
            state.table.complete_page(ticket, fetched);
        }
        Err(error) => {
            state.table.fail_page(ticket, &error);
        }
    }
}
