//! Data model types for Artview.
//!
//! This crate provides the types that flow between the data source, the
//! selection bookkeeping and the rendering layers:
//!
//! - [`artwork`]: the artwork record as returned by the museum API
//! - [`page`]: page indices, page size and fetched page payloads
//!
//! # Page indexing
//!
//! Pages are 0-based everywhere inside Artview. The remote API counts pages
//! from 1; [`PageIndex::api_page`] is the single place where that translation
//! happens.
//!
//! # Example
//!
//! ```
//! use artview_model::{PAGE_SIZE, PageIndex, page_count};
//!
//! let page = PageIndex::new(0);
//! assert_eq!(page.api_page(), 1);
//! assert_eq!(page_count(25, PAGE_SIZE), 3);
//! ```

pub mod artwork;
pub mod page;

pub use artwork::{ArtworkId, ArtworkRecord, NO_INSCRIPTIONS, TABLE_HEADERS};
pub use page::{FetchedPage, PAGE_SIZE, PageIndex, page_count};
