//! Reusable widgets built on the gallery theme.

mod data_table;
mod empty_state;
mod popover;

pub use data_table::{TableColumn, TableRow, data_table};
pub use empty_state::{EmptyState, ErrorState, LoadingState};
pub use popover::popover;
