//! Page indices and fetched page payloads.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::artwork::ArtworkRecord;

/// Number of records shown per page.
pub const PAGE_SIZE: usize = 12;

/// 0-based page index.
///
/// The museum API uses 1-based page numbers. Conversion happens only in
/// [`PageIndex::api_page`] (outbound) and [`PageIndex::from_display`]
/// (human input).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PageIndex(usize);

impl PageIndex {
    /// The first page.
    pub const FIRST: Self = Self(0);

    /// Create a page index from a 0-based value.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Create a page index from a 1-based page number as typed by a person.
    ///
    /// Returns `None` for `0`.
    #[must_use]
    pub fn from_display(number: usize) -> Option<Self> {
        number.checked_sub(1).map(Self)
    }

    /// The 0-based value.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// The 1-based page number expected by the museum API.
    #[must_use]
    pub const fn api_page(self) -> usize {
        self.0 + 1
    }

    /// The following page.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// The preceding page, saturating at the first page.
    #[must_use]
    pub const fn previous(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    /// Index of the first record on this page within the whole collection.
    #[must_use]
    pub const fn offset(self, page_size: usize) -> usize {
        self.0 * page_size
    }
}

impl fmt::Display for PageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page {}", self.0 + 1)
    }
}

/// Number of pages needed to show `total` records, at least one.
#[must_use]
pub fn page_count(total: u64, page_size: usize) -> usize {
    let page_size = page_size.max(1) as u64;
    usize::try_from(total.div_ceil(page_size))
        .unwrap_or(usize::MAX)
        .max(1)
}

/// One page of records together with the source-reported total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchedPage {
    /// Records on this page, in source order.
    pub records: Vec<ArtworkRecord>,
    /// Total number of records across all pages.
    pub total_count: u64,
}

impl FetchedPage {
    /// Create a page from its records and the reported total.
    #[must_use]
    pub fn new(records: Vec<ArtworkRecord>, total_count: u64) -> Self {
        Self {
            records,
            total_count,
        }
    }

    /// The degraded result used when a fetch fails.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the source returned no records for this page.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the page holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_page_is_one_based() {
        assert_eq!(PageIndex::FIRST.api_page(), 1);
        assert_eq!(PageIndex::new(4).api_page(), 5);
    }

    #[test]
    fn test_from_display() {
        assert_eq!(PageIndex::from_display(0), None);
        assert_eq!(PageIndex::from_display(1), Some(PageIndex::FIRST));
        assert_eq!(PageIndex::from_display(3), Some(PageIndex::new(2)));
    }

    #[test]
    fn test_navigation() {
        assert_eq!(PageIndex::FIRST.previous(), PageIndex::FIRST);
        assert_eq!(PageIndex::new(2).next(), PageIndex::new(3));
        assert_eq!(PageIndex::new(2).offset(PAGE_SIZE), 24);
        assert_eq!(PageIndex::new(2).to_string(), "Page 3");
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, PAGE_SIZE), 1);
        assert_eq!(page_count(12, PAGE_SIZE), 1);
        assert_eq!(page_count(13, PAGE_SIZE), 2);
        assert_eq!(page_count(25, PAGE_SIZE), 3);
        assert_eq!(page_count(10, 0), 10);
    }
}
