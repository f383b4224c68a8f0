//! Paginated artwork data source for Artview.
//!
//! This crate fetches one page of artwork records at a time from the Art
//! Institute of Chicago public API and normalizes the response into a
//! [`FetchedPage`](artview_model::FetchedPage).
//!
//! # Overview
//!
//! - [`PageDataSource`] is the seam between the view state and the network.
//!   Its provided [`PageDataSource::fetch`] method implements the
//!   "degrade to empty" policy: failures are logged and replaced by an empty
//!   page, never retried and never propagated.
//! - [`ArticClient`] is the HTTP implementation, built on an async
//!   `reqwest::Client` so it can run inside `iced::Task::perform`.
//! - [`SourceSettings`] holds the base URL, timeout and requested fields.
//!
//! # Example
//!
//! ```no_run
//! use artview_model::PageIndex;
//! use artview_source::{ArticClient, PageDataSource, SourceSettings};
//!
//! async fn first_page() -> artview_source::Result<()> {
//!     let client = ArticClient::new(&SourceSettings::default())?;
//!     let page = client.fetch(PageIndex::FIRST).await;
//!     println!("{} of {} records", page.len(), page.total_count);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod error;
pub mod source;
pub mod wire;

pub use client::ArticClient;
pub use config::{DEFAULT_BASE_URL, DEFAULT_FIELDS, SourceSettings, settings_path};
pub use error::{Result, SourceError};
pub use source::PageDataSource;
pub use wire::{ArtworksResponse, Pagination, parse_artworks_response};

/// Current version of the crate, sent in the user agent.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
