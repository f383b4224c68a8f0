//! Per-page row selection bookkeeping.

use std::collections::{BTreeMap, BTreeSet};

use artview_model::{ArtworkId, ArtworkRecord, PageIndex};
use artview_source::PageDataSource;

use crate::bulk::{BulkOutcome, BulkSelectRequest, BulkSelection, collect_bulk_selection};

/// Records selected on a single page, keyed by id.
pub type PageSelection = BTreeMap<ArtworkId, ArtworkRecord>;

/// Selected records, grouped by the page they were loaded on.
///
/// A record belongs to the page it was selected from and is never moved.
/// Pages that were never touched have no entry at all; a page whose
/// selection was cleared keeps an empty entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pages: BTreeMap<PageIndex, PageSelection>,
}

impl SelectionState {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the selection of one record on `page`.
    ///
    /// Returns whether the record is selected afterwards.
    pub fn toggle_record(&mut self, page: PageIndex, record: &ArtworkRecord) -> bool {
        let selected = self.pages.entry(page).or_default();
        if selected.remove(&record.id).is_some() {
            false
        } else {
            selected.insert(record.id, record.clone());
            true
        }
    }

    /// Replace the selection of `page` with all of `records`, or with nothing.
    pub fn toggle_select_all(&mut self, page: PageIndex, records: &[ArtworkRecord], select: bool) {
        let selection = if select {
            records.iter().map(|r| (r.id, r.clone())).collect()
        } else {
            PageSelection::new()
        };
        self.pages.insert(page, selection);
    }

    /// Whether the selected ids on `page` are exactly the ids of `records`.
    ///
    /// An empty page is never fully selected.
    #[must_use]
    pub fn is_page_fully_selected(&self, page: PageIndex, records: &[ArtworkRecord]) -> bool {
        if records.is_empty() {
            return false;
        }
        let Some(selected) = self.pages.get(&page) else {
            return false;
        };
        let visible: BTreeSet<ArtworkId> = records.iter().map(|r| r.id).collect();
        selected.keys().eq(visible.iter())
    }

    /// Whether `id` is selected on `page`.
    #[must_use]
    pub fn is_selected(&self, page: PageIndex, id: ArtworkId) -> bool {
        self.pages
            .get(&page)
            .is_some_and(|selected| selected.contains_key(&id))
    }

    /// Selection of one page, if the page was ever touched.
    #[must_use]
    pub fn selected_on(&self, page: PageIndex) -> Option<&PageSelection> {
        self.pages.get(&page)
    }

    /// Selected ids on `page`, in ascending order.
    #[must_use]
    pub fn selected_ids_on(&self, page: PageIndex) -> Vec<ArtworkId> {
        self.pages
            .get(&page)
            .map(|selected| selected.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Total number of selected records across all pages.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.pages.values().map(BTreeMap::len).sum()
    }

    /// Whether nothing is selected anywhere.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected_count() == 0
    }

    /// All selected records, ordered by page then id.
    pub fn selected_records(&self) -> impl Iterator<Item = (PageIndex, &ArtworkRecord)> {
        self.pages
            .iter()
            .flat_map(|(page, selected)| selected.values().map(move |record| (*page, record)))
    }

    /// Pages that have a selection entry, in ascending order.
    pub fn pages(&self) -> impl Iterator<Item = PageIndex> + '_ {
        self.pages.keys().copied()
    }

    /// Drop every selection.
    pub fn clear(&mut self) {
        self.pages.clear();
    }

    /// Apply a collected bulk selection in one step.
    ///
    /// Each page in the plan gets its assigned records as its whole
    /// selection. Pages outside the plan are left alone.
    pub fn apply_bulk(&mut self, plan: BulkSelection) -> BulkOutcome {
        let outcome = plan.outcome();
        for (page, records) in plan.into_assignments() {
            self.toggle_select_all(page, &records, true);
        }

        tracing::info!(
            requested = outcome.requested,
            selected = outcome.selected,
            pages_fetched = outcome.pages_fetched,
            exhausted = outcome.exhausted,
            "Bulk select applied"
        );
        outcome
    }

    /// Select `request.count()` rows starting at `start`, spilling onto the
    /// following pages.
    ///
    /// `loaded` are the records already shown for `start`; later pages are
    /// fetched one after another from `source`. The selection is only
    /// updated once the whole loop has finished.
    pub async fn bulk_select<S: PageDataSource>(
        &mut self,
        start: PageIndex,
        request: BulkSelectRequest,
        page_size: usize,
        loaded: &[ArtworkRecord],
        source: &S,
    ) -> BulkOutcome {
        let plan = collect_bulk_selection(source, start, request, page_size, loaded).await;
        self.apply_bulk(plan)
    }
}
