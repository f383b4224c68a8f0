//! Background work run through `Task::perform`.
//!
//! The returned futures own their inputs so they can outlive the
//! `update()` call that started them.

use std::future::Future;

use artview_core::{BulkJob, BulkSelection};
use artview_model::{FetchedPage, PageIndex};
use artview_source::{ArticClient, PageDataSource, SourceError};

/// Fetch one page, keeping the failure so the UI can show it.
pub fn fetch_page(
    client: ArticClient,
    page: PageIndex,
) -> impl Future<Output = Result<FetchedPage, SourceError>> + Send + 'static {
    async move { client.fetch_page(page).await }
}

/// Walk pages for a bulk select.
///
/// Failed fetches end the walk early; the records gathered so far are kept.
pub fn collect_bulk(
    client: ArticClient,
    job: BulkJob,
) -> impl Future<Output = BulkSelection> + Send + 'static {
    async move { job.run(&client).await }
}
