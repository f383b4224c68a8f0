use artview_core::{BulkOutcome, TableState};

/// Result of `artview page`.
#[derive(Debug, Clone)]
pub struct PageReport {
    /// Table state after loading the page.
    pub table: TableState,
}

impl PageReport {
    /// Whether the fetch failed and an empty page was shown instead.
    pub fn has_errors(&self) -> bool {
        self.table.pagination().error().is_some()
    }
}

/// Result of `artview bulk`.
#[derive(Debug, Clone)]
pub struct BulkReport {
    /// Table state after loading the start page and applying the selection.
    pub table: TableState,
    /// Summary of the bulk select.
    pub outcome: BulkOutcome,
}

impl BulkReport {
    /// Whether the start page could not be loaded.
    pub fn has_errors(&self) -> bool {
        self.table.pagination().error().is_some()
    }
}
