//! The page data source abstraction.

use std::future::Future;
use std::sync::Arc;

use artview_model::{FetchedPage, PageIndex};

use crate::error::Result;

/// A paginated source of artwork records.
///
/// Implementations perform exactly one request per call and do not cache:
/// fetching the same page twice hits the source twice. Out-of-range pages are
/// expected to come back empty rather than fail.
pub trait PageDataSource: Send + Sync {
    /// Fetch one page, reporting failures to the caller.
    fn fetch_page(&self, page: PageIndex) -> impl Future<Output = Result<FetchedPage>> + Send;

    /// Fetch one page, degrading any failure to an empty page.
    ///
    /// The failure is logged and [`FetchedPage::empty`] is returned. No retry
    /// is attempted.
    fn fetch(&self, page: PageIndex) -> impl Future<Output = FetchedPage> + Send {
        async move {
            match self.fetch_page(page).await {
                Ok(fetched) => fetched,
                Err(err) => {
                    tracing::warn!(
                        page = page.get(),
                        error = %err,
                        "Page fetch failed, continuing with an empty page"
                    );
                    FetchedPage::empty()
                }
            }
        }
    }
}

impl<S: PageDataSource> PageDataSource for Arc<S> {
    fn fetch_page(&self, page: PageIndex) -> impl Future<Output = Result<FetchedPage>> + Send {
        self.as_ref().fetch_page(page)
    }
}

impl<S: PageDataSource> PageDataSource for &S {
    fn fetch_page(&self, page: PageIndex) -> impl Future<Output = Result<FetchedPage>> + Send {
        (**self).fetch_page(page)
    }
}
