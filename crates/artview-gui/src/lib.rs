//! Artview - GUI Library
//!
//! Desktop browser for the Art Institute of Chicago collection: a paginated
//! artwork table with row checkboxes, select-all, a "select N rows" bulk
//! popover and a panel listing the selection across pages.
//!
//! Built with Iced 0.14.0 using the Elm architecture. View state lives in
//! [`artview_core::TableState`]; this crate adds messages, handlers and
//! rendering on top of it.

pub mod app;
pub mod component;
pub mod error;
pub mod handler;
pub mod message;
pub mod service;
pub mod state;
pub mod theme;
pub mod view;

pub use app::App;
pub use error::GuiError;
