//! Currently displayed page and its fetch lifecycle.

use artview_model::{ArtworkRecord, FetchedPage, PAGE_SIZE, PageIndex, page_count};
use artview_source::SourceError;

/// Handle for one page request.
///
/// Only the most recently issued ticket may update the displayed page; a
/// response carrying an older ticket is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTicket {
    page: PageIndex,
    seq: u64,
}

impl PageTicket {
    /// Page this ticket was issued for.
    #[must_use]
    pub fn page(self) -> PageIndex {
        self.page
    }

    /// Sequence number of the request.
    #[must_use]
    pub fn seq(self) -> u64 {
        self.seq
    }
}

/// Pagination state of the artwork table.
#[derive(Debug, Clone)]
pub struct PaginationState {
    current: PageIndex,
    records: Vec<ArtworkRecord>,
    total_count: u64,
    loading: bool,
    latest_seq: u64,
    error: Option<String>,
    page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current: PageIndex::FIRST,
            records: Vec::new(),
            total_count: 0,
            loading: false,
            latest_seq: 0,
            error: None,
            page_size: PAGE_SIZE,
        }
    }
}

impl PaginationState {
    /// Create the state for an application that has not loaded anything yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start loading `page` and issue the ticket its response must carry.
    ///
    /// The previous records stay visible until the response arrives.
    pub fn request(&mut self, page: PageIndex) -> PageTicket {
        self.latest_seq += 1;
        self.current = page;
        self.loading = true;
        PageTicket {
            page,
            seq: self.latest_seq,
        }
    }

    /// Whether `ticket` is the most recent request.
    #[must_use]
    pub fn is_current(&self, ticket: PageTicket) -> bool {
        ticket.seq == self.latest_seq
    }

    /// Apply a fetched page if `ticket` is still current.
    ///
    /// Returns `false` for stale responses, which are discarded.
    pub fn complete(&mut self, ticket: PageTicket, fetched: FetchedPage) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(
                page = ticket.page.get(),
                seq = ticket.seq,
                latest = self.latest_seq,
                "Discarding stale page response"
            );
            return false;
        }

        tracing::info!(
            page = ticket.page.get(),
            records = fetched.len(),
            total = fetched.total_count,
            "Page loaded"
        );
        self.records = fetched.records;
        self.total_count = fetched.total_count;
        self.loading = false;
        self.error = None;
        true
    }

    /// Record a failed fetch for `ticket`.
    ///
    /// The table falls back to an empty page and the error's user message is
    /// kept for display. Stale failures are discarded like stale successes.
    pub fn fail(&mut self, ticket: PageTicket, error: &SourceError) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(
                page = ticket.page.get(),
                seq = ticket.seq,
                "Discarding stale page failure"
            );
            return false;
        }

        tracing::warn!(page = ticket.page.get(), %error, "Page fetch failed");
        self.records = Vec::new();
        self.total_count = 0;
        self.loading = false;
        self.error = Some(error.user_message().to_string());
        true
    }

    /// Forget the last error message.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Index of the displayed page.
    #[must_use]
    pub fn current_page(&self) -> PageIndex {
        self.current
    }

    /// Records of the displayed page, in source order.
    #[must_use]
    pub fn records(&self) -> &[ArtworkRecord] {
        &self.records
    }

    /// Total number of records reported by the source.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Whether a request is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the last failed fetch, if not dismissed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Rows per page.
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages for the reported total, at least one.
    #[must_use]
    pub fn page_count(&self) -> usize {
        page_count(self.total_count, self.page_size)
    }

    /// Index of the last page.
    #[must_use]
    pub fn last_page(&self) -> PageIndex {
        PageIndex::new(self.page_count() - 1)
    }

    /// Whether a previous page exists.
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current > PageIndex::FIRST
    }

    /// Whether a following page exists.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current < self.last_page()
    }

    /// 1-based range of rows on the displayed page, for "start-end of total".
    ///
    /// Returns `None` when the page is empty.
    #[must_use]
    pub fn row_range(&self) -> Option<(u64, u64)> {
        if self.records.is_empty() {
            return None;
        }
        let start = self.current.offset(self.page_size) as u64 + 1;
        let end = start + self.records.len() as u64 - 1;
        Some((start, end))
    }
}
