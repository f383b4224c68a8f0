//! Message types for the Iced application.
//!
//! Messages are grouped by the handler that processes them; background
//! results carry what the handler needs to apply them.

use iced::keyboard;

use artview_core::{BulkSelection, PageTicket};
use artview_model::{ArtworkId, FetchedPage, PageIndex};
use artview_source::SourceError;

/// Root message type.
#[derive(Debug, Clone)]
pub enum Message {
    /// Table interactions.
    Table(TableMessage),

    /// Bulk-select popover interactions.
    Bulk(BulkMessage),

    /// A page fetch finished.
    PageLoaded {
        /// Ticket issued when the request started.
        ticket: PageTicket,
        /// Fetched page or the reason it failed.
        result: Result<FetchedPage, SourceError>,
    },

    /// Switch between light and dark mode.
    ToggleTheme,

    /// Hide the status bar message or error.
    DismissStatus,

    /// Global keyboard shortcut.
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    /// No-op for unhandled events.
    Noop,
}

/// Table interactions.
#[derive(Debug, Clone)]
pub enum TableMessage {
    FirstPage,
    PreviousPage,
    NextPage,
    LastPage,

    /// Numbered page button.
    GoToPage(PageIndex),

    /// Row checkbox clicked.
    RowToggled(ArtworkId),

    /// Header checkbox clicked; `true` selects the page.
    SelectAllToggled(bool),

    /// Drop the selection on every page.
    ClearSelection,

    /// Re-request the displayed page after a failure.
    Retry,

    /// Hide the fetch error banner.
    DismissError,
}

/// Bulk-select popover interactions.
#[derive(Debug, Clone)]
pub enum BulkMessage {
    /// Chevron next to the header checkbox.
    Toggle,

    Close,

    /// Count input edited.
    CountChanged(String),

    /// Submit button or Enter in the count input.
    Submit,

    /// The background page walk finished.
    Finished(BulkSelection),
}
