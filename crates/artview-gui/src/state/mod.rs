//! Application state.
//!
//! - [`AppState`]: everything `update()` mutates
//! - [`Settings`]: persisted preferences

mod app_state;
mod settings;

pub use app_state::{AppState, BulkPopover};
pub use settings::{DisplaySettings, Settings};
