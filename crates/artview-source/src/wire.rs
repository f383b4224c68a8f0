//! Response payloads of the `/artworks` listing endpoint.

use artview_model::{ArtworkRecord, FetchedPage};
use serde::Deserialize;

use crate::error::Result;

/// Body of a `GET /artworks` response.
///
/// Only the parts Artview uses are modelled; everything else (`info`,
/// `config`) is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtworksResponse {
    /// Records on the requested page. `null` or missing means none.
    #[serde(default)]
    pub data: Option<Vec<ArtworkRecord>>,

    /// Pagination metadata.
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Pagination block of a listing response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pagination {
    /// Total number of records across all pages.
    #[serde(default)]
    pub total: u64,
    /// Page size the server applied.
    #[serde(default)]
    pub limit: u64,
    /// Offset of the first record on this page.
    #[serde(default)]
    pub offset: u64,
    /// Total number of pages.
    #[serde(default)]
    pub total_pages: u64,
    /// 1-based page number the server returned.
    #[serde(default)]
    pub current_page: u64,
}

impl ArtworksResponse {
    /// Normalize into `{records, total_count}`.
    #[must_use]
    pub fn into_fetched_page(self) -> FetchedPage {
        FetchedPage::new(
            self.data.unwrap_or_default(),
            self.pagination.map(|p| p.total).unwrap_or(0),
        )
    }
}

/// Parse a listing response body.
pub fn parse_artworks_response(body: &[u8]) -> Result<FetchedPage> {
    let response: ArtworksResponse = serde_json::from_slice(body)?;
    Ok(response.into_fetched_page())
}
