//! Root application state.

use artview_core::TableState;
use artview_source::ArticClient;

use crate::error::GuiError;
use crate::state::Settings;
use crate::theme::ThemeMode;

/// Root application state.
///
/// Owned by [`App`](crate::app::App) and mutated only in `update()`.
pub struct AppState {
    /// Persisted preferences.
    pub settings: Settings,

    /// HTTP client, absent when the settings could not produce one.
    pub client: Option<ArticClient>,

    /// Pagination, selection and the bulk gate.
    pub table: TableState,

    /// Bulk-select popover.
    pub bulk: BulkPopover,

    /// Result line of the last bulk select.
    pub status: Option<String>,

    /// App-level error shown in the status bar.
    pub error: Option<GuiError>,
}

impl AppState {
    /// Build state from loaded settings.
    ///
    /// A client that cannot be built is reported through [`AppState::error`]
    /// rather than aborting startup.
    pub fn new(settings: Settings) -> Self {
        let (client, error) = match ArticClient::new(&settings.source) {
            Ok(client) => (Some(client), None),
            Err(error) => {
                tracing::error!(%error, "Failed to create artwork client");
                (None, Some(GuiError::from(error)))
            }
        };

        Self {
            settings,
            client,
            table: TableState::new(),
            bulk: BulkPopover::default(),
            status: None,
            error,
        }
    }

    /// State without a client, for tests that never fetch.
    pub fn offline(settings: Settings) -> Self {
        Self {
            settings,
            client: None,
            table: TableState::new(),
            bulk: BulkPopover::default(),
            status: None,
            error: None,
        }
    }

    /// Theme chosen in the display settings.
    pub fn theme_mode(&self) -> ThemeMode {
        self.settings.display.theme_mode
    }
}

/// State of the "select N rows" popover next to the header checkbox.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkPopover {
    /// Whether the popover is shown.
    pub open: bool,

    /// Raw text of the count input.
    pub input: String,

    /// Validation message under the input.
    pub error: Option<GuiError>,
}

impl BulkPopover {
    /// Show the popover, keeping the last typed count.
    pub fn open(&mut self) {
        self.open = true;
        self.error = None;
    }

    /// Hide the popover and reset its input.
    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// Parse the input as a row count.
    ///
    /// Zero parses here; the bulk gate rejects it.
    pub fn count(&self) -> Result<usize, GuiError> {
        self.input
            .trim()
            .parse::<usize>()
            .map_err(|_| GuiError::InvalidBulkCount)
    }
}
