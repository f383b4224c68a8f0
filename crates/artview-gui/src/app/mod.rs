//! Main application module.
//!
//! [`App`] owns the [`AppState`] and implements the Elm architecture:
//! `update` dispatches messages to handlers, `view` renders from state.
//!
//! ```rust,ignore
//! iced::application(App::new, App::update, App::view)
//!     .title(App::title)
//!     .theme(App::theme)
//!     .subscription(App::subscription)
//!     .run()
//! ```

mod keyboard;
mod subscription;

use iced::{Element, Subscription, Task, Theme};

use artview_model::PageIndex;

use crate::error::ErrorCategory;
use crate::handler::{BulkHandler, MessageHandler, TableHandler, apply_page_result, load_page};
use crate::message::Message;
use crate::state::{AppState, Settings};
use crate::theme::gallery_theme;
use crate::view::view_app;

pub use keyboard::shortcut;

/// Main application struct.
pub struct App {
    /// Application state.
    state: AppState,
}

impl App {
    /// Load settings from disk and request the first page.
    pub fn new() -> (Self, Task<Message>) {
        Self::with_settings(Settings::load())
    }

    /// Start with explicit settings and request the first page.
    pub fn with_settings(settings: Settings) -> (Self, Task<Message>) {
        let mut state = AppState::new(settings);
        let task = load_page(&mut state, PageIndex::FIRST);
        (Self { state }, task)
    }

    /// Wrap existing state without starting any fetch.
    pub fn from_state(state: AppState) -> Self {
        Self { state }
    }

    /// Read access to the state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Update state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // Handlers
            // =================================================================
            Message::Table(msg) => TableHandler.handle(&mut self.state, msg),
            Message::Bulk(msg) => BulkHandler.handle(&mut self.state, msg),

            // =================================================================
            // Background results
            // =================================================================
            Message::PageLoaded { ticket, result } => {
                apply_page_result(&mut self.state, ticket, result);
                Task::none()
            }

            // =================================================================
            // Settings
            // =================================================================
            Message::ToggleTheme => {
                let mode = self.state.theme_mode().toggled();
                self.state.settings.display.theme_mode = mode;
                tracing::info!(%mode, "Theme changed");
                if let Err(error) = self.state.settings.save() {
                    tracing::warn!(%error, "Failed to save settings");
                    self.state.error = Some(error);
                }
                Task::none()
            }

            // =================================================================
            // Status bar and shortcuts
            // =================================================================
            Message::DismissStatus => {
                self.state.status = None;
                // A missing client stays visible in the table body.
                if self
                    .state
                    .error
                    .as_ref()
                    .is_none_or(|error| error.category() != ErrorCategory::Source)
                {
                    self.state.error = None;
                }
                Task::none()
            }
            Message::KeyPressed(key, modifiers) => {
                shortcut(&self.state, &key, modifiers).map_or_else(Task::none, Task::done)
            }
            Message::Noop => Task::none(),
        }
    }

    /// Render the current state.
    pub fn view(&self) -> Element<'_, Message> {
        view_app(&self.state)
    }

    /// Window title with the selection count.
    pub fn title(&self) -> String {
        match self.state.table.selection().selected_count() {
            0 => "Artview".to_string(),
            count => format!("Artview - {count} selected"),
        }
    }

    /// Theme for the configured mode.
    pub fn theme(&self) -> Theme {
        gallery_theme(self.state.theme_mode())
    }

    /// Event subscriptions.
    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_subscription(&self.state)
    }
}
