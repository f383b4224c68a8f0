//! Bulk-select handler: the popover and the background page walk.

use iced::Task;

use artview_core::{BulkOutcome, SelectionError};

use crate::error::GuiError;
use crate::handler::MessageHandler;
use crate::message::{BulkMessage, Message};
use crate::service;
use crate::state::AppState;

/// Handler for [`BulkMessage`].
pub struct BulkHandler;

impl MessageHandler<BulkMessage> for BulkHandler {
    fn handle(&self, state: &mut AppState, msg: BulkMessage) -> Task<Message> {
        match msg {
            BulkMessage::Toggle => {
                if state.bulk.open {
                    state.bulk.close();
                } else if !state.table.is_bulk_in_flight() {
                    state.bulk.open();
                }
                Task::none()
            }
            BulkMessage::Close => {
                state.bulk.close();
                Task::none()
            }
            BulkMessage::CountChanged(input) => {
                state.bulk.input = input;
                state.bulk.error = None;
                Task::none()
            }
            BulkMessage::Submit => submit(state),
            BulkMessage::Finished(plan) => {
                let outcome = state.table.finish_bulk(plan);
                state.bulk.close();
                state.status = Some(bulk_summary(&outcome));
                Task::none()
            }
        }
    }
}

fn submit(state: &mut AppState) -> Task<Message> {
    let count = match state.bulk.count() {
        Ok(count) => count,
        Err(error) => {
            state.bulk.error = Some(error);
            return Task::none();
        }
    };
    // Without a client the gate would never reopen.
    let Some(client) = state.client.clone() else {
        state.bulk.error = Some(GuiError::client("no connection to the artwork service"));
        return Task::none();
    };

    match state.table.begin_bulk(count) {
        Ok(job) => Task::perform(service::collect_bulk(client, job), |plan| {
            Message::Bulk(BulkMessage::Finished(plan))
        }),
        Err(SelectionError::EmptyBulkRequest) => {
            state.bulk.error = Some(GuiError::InvalidBulkCount);
            Task::none()
        }
        Err(SelectionError::BulkInFlight) => {
            tracing::debug!(count, "Bulk select already running");
            Task::none()
        }
        Err(error @ SelectionError::PageLoading) => {
            state.bulk.error = Some(GuiError::BulkUnavailable {
                reason: error.to_string(),
            });
            Task::none()
        }
    }
}

/// Status bar text for a finished bulk select.
pub fn bulk_summary(outcome: &BulkOutcome) -> String {
    let rows = if outcome.selected == 1 { "row" } else { "rows" };
    if outcome.is_complete() {
        format!("Selected {} {rows}", outcome.selected)
    } else {
        format!(
            "Selected {} of {} {rows}; no more artworks to select",
            outcome.selected, outcome.requested
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_complete() {
        let outcome = BulkOutcome {
            requested: 25,
            selected: 25,
            pages_fetched: 2,
            exhausted: false,
        };
        assert_eq!(bulk_summary(&outcome), "Selected 25 rows");
    }

    #[test]
    fn test_summary_exhausted() {
        let outcome = BulkOutcome {
            requested: 50,
            selected: 30,
            pages_fetched: 3,
            exhausted: true,
        };
        assert_eq!(
            bulk_summary(&outcome),
            "Selected 30 of 50 rows; no more artworks to select"
        );
    }
}
