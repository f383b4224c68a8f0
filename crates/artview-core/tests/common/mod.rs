//! Shared fixtures for artview-core integration tests.

#![allow(dead_code)]

use std::sync::Mutex;

use artview_model::{ArtworkId, ArtworkRecord, FetchedPage, PAGE_SIZE, PageIndex};
use artview_source::{PageDataSource, Result, SourceError};

pub fn record(id: u64) -> ArtworkRecord {
    ArtworkRecord {
        id: ArtworkId(id),
        title: format!("Artwork {id}"),
        artist_display: "Unknown".to_string(),
        place_of_origin: "Chicago".to_string(),
        inscriptions: None,
        date_start: 1900,
        date_end: 1900,
    }
}

/// In-memory source serving `total` records with ids `1..=total`, twelve per
/// page. Pages listed in `failing` return an error. Every fetched page is
/// recorded.
pub struct MemorySource {
    total: u64,
    failing: Vec<PageIndex>,
    fetched: Mutex<Vec<PageIndex>>,
}

impl MemorySource {
    pub fn with_total(total: u64) -> Self {
        Self {
            total,
            failing: Vec::new(),
            fetched: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_on(mut self, page: PageIndex) -> Self {
        self.failing.push(page);
        self
    }

    pub fn page(&self, page: PageIndex) -> FetchedPage {
        let start = page.offset(PAGE_SIZE) as u64 + 1;
        let end = (start + PAGE_SIZE as u64 - 1).min(self.total);
        FetchedPage::new((start..=end).map(record).collect(), self.total)
    }

    pub fn fetched(&self) -> Vec<PageIndex> {
        self.fetched.lock().unwrap().clone()
    }
}

impl PageDataSource for MemorySource {
    async fn fetch_page(&self, page: PageIndex) -> Result<FetchedPage> {
        self.fetched.lock().unwrap().push(page);
        if self.failing.contains(&page) {
            return Err(SourceError::Network("simulated outage".to_string()));
        }
        Ok(self.page(page))
    }
}

pub fn ids(records: &[ArtworkRecord]) -> Vec<u64> {
    records.iter().map(|r| r.id.0).collect()
}
