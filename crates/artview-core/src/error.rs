//! Error types for selection operations.

use thiserror::Error;

/// Errors raised by selection and bulk-select operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// A bulk select was requested for zero rows.
    #[error("bulk select needs at least one row")]
    EmptyBulkRequest,

    /// Another bulk select has not finished yet.
    #[error("a bulk select is already running")]
    BulkInFlight,

    /// The displayed page is still loading; its rows belong to another page.
    #[error("the page is still loading")]
    PageLoading,
}

/// Result type alias for selection operations.
pub type Result<T> = std::result::Result<T, SelectionError>;
