//! View state for the Artview artwork table.
//!
//! This crate holds the in-memory bookkeeping behind the table, independent
//! of how it is rendered:
//!
//! - [`SelectionState`]: which records are selected, grouped by page
//! - [`collect_bulk_selection`]: the "select N rows across pages" loop
//! - [`PaginationState`]: the displayed page, guarded against stale responses
//! - [`TableState`]: both of the above plus the bulk-select gate
//!
//! All state is owned by a single writer. Fetches happen elsewhere; their
//! results are fed back through [`TableState::complete_page`] and
//! [`TableState::finish_bulk`].
//!
//! # Example
//!
//! ```
//! use artview_core::TableState;
//! use artview_model::{ArtworkId, ArtworkRecord, FetchedPage, PageIndex};
//!
//! let mut table = TableState::new();
//! let ticket = table.request_page(PageIndex::FIRST);
//! let record = ArtworkRecord {
//!     id: ArtworkId(1),
//!     title: "Nighthawks".to_string(),
//!     artist_display: "Edward Hopper".to_string(),
//!     place_of_origin: "United States".to_string(),
//!     inscriptions: None,
//!     date_start: 1942,
//!     date_end: 1942,
//! };
//! table.complete_page(ticket, FetchedPage::new(vec![record], 1));
//!
//! table.toggle_select_all(true);
//! assert!(table.is_page_fully_selected());
//! ```

pub mod bulk;
pub mod error;
pub mod pagination;
pub mod selection;
pub mod table;

pub use bulk::{BulkOutcome, BulkSelectRequest, BulkSelection, collect_bulk_selection};
pub use error::{Result, SelectionError};
pub use pagination::{PageTicket, PaginationState};
pub use selection::{PageSelection, SelectionState};
pub use table::{BulkJob, TableState};
