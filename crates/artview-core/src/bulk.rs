//! Cross-page bulk selection.
//!
//! A bulk select takes the first rows of the current page and keeps fetching
//! the following pages, one after another, until enough rows are collected
//! or a page comes back empty. The result is a [`BulkSelection`] plan that
//! [`SelectionState::apply_bulk`](crate::SelectionState::apply_bulk) merges
//! in a single step.

use std::num::NonZeroUsize;

use artview_model::{ArtworkRecord, PageIndex};
use artview_source::PageDataSource;

use crate::error::{Result, SelectionError};

/// A validated request to select a number of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkSelectRequest {
    count: NonZeroUsize,
}

impl BulkSelectRequest {
    /// Validate a requested row count.
    pub fn new(count: usize) -> Result<Self> {
        NonZeroUsize::new(count)
            .map(|count| Self { count })
            .ok_or(SelectionError::EmptyBulkRequest)
    }

    /// Number of rows requested.
    #[must_use]
    pub fn count(self) -> usize {
        self.count.get()
    }
}

impl TryFrom<usize> for BulkSelectRequest {
    type Error = SelectionError;

    fn try_from(count: usize) -> Result<Self> {
        Self::new(count)
    }
}

/// Summary of a finished bulk select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkOutcome {
    /// Rows the user asked for.
    pub requested: usize,
    /// Rows actually selected.
    pub selected: usize,
    /// Pages fetched beyond the starting page.
    pub pages_fetched: usize,
    /// Whether the loop stopped on an empty page before reaching the count.
    pub exhausted: bool,
}

impl BulkOutcome {
    /// Whether every requested row was selected.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.selected == self.requested
    }
}

/// Page assignments collected by a bulk select, not yet applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkSelection {
    requested: usize,
    assignments: Vec<(PageIndex, Vec<ArtworkRecord>)>,
    pages_fetched: usize,
    exhausted: bool,
}

impl BulkSelection {
    /// Pages and the records that become their selection, in page order.
    #[must_use]
    pub fn assignments(&self) -> &[(PageIndex, Vec<ArtworkRecord>)] {
        &self.assignments
    }

    /// Consume the plan, yielding its assignments.
    #[must_use]
    pub fn into_assignments(self) -> Vec<(PageIndex, Vec<ArtworkRecord>)> {
        self.assignments
    }

    /// Number of records across all assignments.
    #[must_use]
    pub fn selected(&self) -> usize {
        self.assignments.iter().map(|(_, records)| records.len()).sum()
    }

    /// Summary of this plan.
    #[must_use]
    pub fn outcome(&self) -> BulkOutcome {
        BulkOutcome {
            requested: self.requested,
            selected: self.selected(),
            pages_fetched: self.pages_fetched,
            exhausted: self.exhausted,
        }
    }
}

/// Collect the rows a bulk select of `request` starting at `start` assigns.
///
/// `loaded` holds the records already displayed for `start`. Following pages
/// go through [`PageDataSource::fetch`], so a failed fetch looks like an
/// empty page and ends the loop; assignments made before it are kept.
/// There is no upper bound on the number of pages visited.
pub async fn collect_bulk_selection<S: PageDataSource>(
    source: &S,
    start: PageIndex,
    request: BulkSelectRequest,
    page_size: usize,
    loaded: &[ArtworkRecord],
) -> BulkSelection {
    let count = request.count();
    let first: Vec<ArtworkRecord> = loaded.iter().take(count.min(page_size)).cloned().collect();
    let mut remaining = count - first.len();

    let mut plan = BulkSelection {
        requested: count,
        assignments: vec![(start, first)],
        pages_fetched: 0,
        exhausted: false,
    };

    let mut page = start;
    while remaining > 0 {
        page = page.next();
        let fetched = source.fetch(page).await;
        plan.pages_fetched += 1;

        if fetched.is_exhausted() {
            tracing::debug!(page = page.get(), remaining, "Bulk select ran out of records");
            plan.exhausted = true;
            break;
        }

        let taken: Vec<ArtworkRecord> = fetched.records.into_iter().take(remaining).collect();
        remaining -= taken.len();
        plan.assignments.push((page, taken));
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_count_rejected() {
        assert_eq!(
            BulkSelectRequest::new(0),
            Err(SelectionError::EmptyBulkRequest)
        );
        assert_eq!(BulkSelectRequest::try_from(25).map(BulkSelectRequest::count), Ok(25));
    }

    #[test]
    fn test_outcome_completeness() {
        let outcome = BulkOutcome {
            requested: 30,
            selected: 26,
            pages_fetched: 3,
            exhausted: true,
        };
        assert!(!outcome.is_complete());
    }
}
