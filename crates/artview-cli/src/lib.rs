//! CLI library components for Artview.

pub mod logging;
pub mod settings;
pub mod summary;
pub mod types;
