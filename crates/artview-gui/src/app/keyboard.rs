//! Keyboard shortcuts.

use iced::keyboard::{self, key};

use crate::message::{BulkMessage, Message, TableMessage};
use crate::state::AppState;

/// Map a key press to the message it triggers, if any.
///
/// - `Escape`: close the bulk popover
/// - `Left` / `Right`: previous / next page
/// - `Cmd/Ctrl+Left` / `Cmd/Ctrl+Right`: first / last page
///
/// Paging keys are ignored while the popover is open so its input keeps
/// the arrow keys.
pub fn shortcut(
    state: &AppState,
    key: &keyboard::Key,
    modifiers: keyboard::Modifiers,
) -> Option<Message> {
    match key.as_ref() {
        keyboard::Key::Named(key::Named::Escape) if state.bulk.open => {
            Some(Message::Bulk(BulkMessage::Close))
        }
        _ if state.bulk.open => None,
        keyboard::Key::Named(key::Named::ArrowLeft) if modifiers.command() => {
            Some(Message::Table(TableMessage::FirstPage))
        }
        keyboard::Key::Named(key::Named::ArrowRight) if modifiers.command() => {
            Some(Message::Table(TableMessage::LastPage))
        }
        keyboard::Key::Named(key::Named::ArrowLeft) => {
            Some(Message::Table(TableMessage::PreviousPage))
        }
        keyboard::Key::Named(key::Named::ArrowRight) => {
            Some(Message::Table(TableMessage::NextPage))
        }
        _ => None,
    }
}
