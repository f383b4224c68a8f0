//! Combined state behind the artwork table.

use artview_model::{ArtworkId, ArtworkRecord, FetchedPage, PageIndex};
use artview_source::{PageDataSource, SourceError};

use crate::bulk::{BulkOutcome, BulkSelectRequest, BulkSelection, collect_bulk_selection};
use crate::error::{Result, SelectionError};
use crate::pagination::{PageTicket, PaginationState};
use crate::selection::SelectionState;

/// Everything the table view renders from.
///
/// Pagination and selection are independent: changing page never touches
/// the selection, and the selection survives until cleared.
#[derive(Debug, Clone, Default)]
pub struct TableState {
    pagination: PaginationState,
    selection: SelectionState,
    bulk_in_flight: bool,
}

/// Inputs of a bulk select, detached from the table so it can run as a
/// background task.
#[derive(Debug, Clone)]
pub struct BulkJob {
    start: PageIndex,
    request: BulkSelectRequest,
    page_size: usize,
    loaded: Vec<ArtworkRecord>,
}

impl BulkJob {
    /// Page the bulk select starts on.
    #[must_use]
    pub fn start(&self) -> PageIndex {
        self.start
    }

    /// The validated request.
    #[must_use]
    pub fn request(&self) -> BulkSelectRequest {
        self.request
    }

    /// Walk the pages and collect the selection plan.
    pub async fn run<S: PageDataSource>(self, source: &S) -> BulkSelection {
        collect_bulk_selection(source, self.start, self.request, self.page_size, &self.loaded)
            .await
    }
}

impl TableState {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Pagination
    // =========================================================================

    /// Pagination half of the state.
    #[must_use]
    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    /// Start loading `page`.
    pub fn request_page(&mut self, page: PageIndex) -> PageTicket {
        self.pagination.request(page)
    }

    /// Apply a page response; stale responses are ignored.
    pub fn complete_page(&mut self, ticket: PageTicket, fetched: FetchedPage) -> bool {
        self.pagination.complete(ticket, fetched)
    }

    /// Record a page fetch failure.
    pub fn fail_page(&mut self, ticket: PageTicket, error: &SourceError) -> bool {
        self.pagination.fail(ticket, error)
    }

    /// Hide the fetch error banner.
    pub fn dismiss_error(&mut self) {
        self.pagination.dismiss_error();
    }

    /// Records of the displayed page.
    #[must_use]
    pub fn records(&self) -> &[ArtworkRecord] {
        self.pagination.records()
    }

    /// Whether a page request is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pagination.is_loading()
    }

    /// Index of the displayed page.
    #[must_use]
    pub fn current_page(&self) -> PageIndex {
        self.pagination.current_page()
    }

    /// Total number of records reported by the source.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.pagination.total_count()
    }

    /// Number of pages, at least one.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pagination.page_count()
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Selection half of the state.
    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Whether `record` is selected on the displayed page.
    #[must_use]
    pub fn is_selected(&self, record: &ArtworkRecord) -> bool {
        self.selection.is_selected(self.current_page(), record.id)
    }

    /// Whether every displayed record is selected.
    #[must_use]
    pub fn is_page_fully_selected(&self) -> bool {
        self.selection
            .is_page_fully_selected(self.current_page(), self.records())
    }

    /// Flip one displayed record.
    ///
    /// Returns `None` when `id` is not on the displayed page or the page is
    /// still loading, otherwise whether the record is now selected.
    pub fn toggle_record(&mut self, id: ArtworkId) -> Option<bool> {
        if self.is_loading() {
            return None;
        }
        let page = self.pagination.current_page();
        let record = self.pagination.records().iter().find(|r| r.id == id)?;
        Some(self.selection.toggle_record(page, record))
    }

    /// Select or deselect the whole displayed page.
    ///
    /// Ignored while the page is loading.
    pub fn toggle_select_all(&mut self, select: bool) {
        if self.is_loading() {
            tracing::debug!(select, "Select all ignored while loading");
            return;
        }
        let page = self.pagination.current_page();
        self.selection
            .toggle_select_all(page, self.pagination.records(), select);
    }

    /// Drop every selection on every page.
    pub fn clear_selection(&mut self) {
        tracing::info!(cleared = self.selection.selected_count(), "Selection cleared");
        self.selection.clear();
    }

    // =========================================================================
    // Bulk select
    // =========================================================================

    /// Whether a bulk select is running.
    #[must_use]
    pub fn is_bulk_in_flight(&self) -> bool {
        self.bulk_in_flight
    }

    /// Validate `count` and start a bulk select from the displayed page.
    ///
    /// Fails while another bulk select is still running or the displayed
    /// page has not arrived yet.
    pub fn begin_bulk(&mut self, count: usize) -> Result<BulkJob> {
        if self.bulk_in_flight {
            return Err(SelectionError::BulkInFlight);
        }
        if self.is_loading() {
            return Err(SelectionError::PageLoading);
        }
        let request = BulkSelectRequest::new(count)?;
        self.bulk_in_flight = true;

        tracing::info!(
            start = self.current_page().get(),
            count,
            "Bulk select started"
        );
        Ok(BulkJob {
            start: self.current_page(),
            request,
            page_size: self.pagination.page_size(),
            loaded: self.records().to_vec(),
        })
    }

    /// Apply a finished bulk select and reopen the gate.
    pub fn finish_bulk(&mut self, plan: BulkSelection) -> BulkOutcome {
        self.bulk_in_flight = false;
        self.selection.apply_bulk(plan)
    }

    /// Run a whole bulk select against `source` and apply it.
    pub async fn bulk_select<S: PageDataSource>(
        &mut self,
        count: usize,
        source: &S,
    ) -> Result<BulkOutcome> {
        let job = self.begin_bulk(count)?;
        let plan = job.run(source).await;
        Ok(self.finish_bulk(plan))
    }
}
