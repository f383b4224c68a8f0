//! Tests for the degrade-to-empty policy of `PageDataSource::fetch`.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use artview_model::{ArtworkId, ArtworkRecord, FetchedPage, PageIndex};
use artview_source::{PageDataSource, Result, SourceError};

fn record(id: u64) -> ArtworkRecord {
    ArtworkRecord {
        id: ArtworkId(id),
        title: format!("Artwork {id}"),
        artist_display: String::new(),
        place_of_origin: String::new(),
        inscriptions: None,
        date_start: 0,
        date_end: 0,
    }
}

/// Serves page 0 and fails on anything else.
#[derive(Default)]
struct FlakySource {
    calls: AtomicUsize,
}

impl PageDataSource for FlakySource {
    async fn fetch_page(&self, page: PageIndex) -> Result<FetchedPage> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if page == PageIndex::FIRST {
            Ok(FetchedPage::new(vec![record(1), record(2)], 40))
        } else {
            Err(SourceError::Status {
                status: 500,
                url: format!("fake://artworks?page={}", page.api_page()),
            })
        }
    }
}

#[tokio::test]
async fn fetch_passes_through_success() {
    let source = FlakySource::default();
    let page = source.fetch(PageIndex::FIRST).await;

    assert_eq!(page.len(), 2);
    assert_eq!(page.total_count, 40);
}

#[tokio::test]
async fn fetch_degrades_failure_to_empty_page() {
    let source = FlakySource::default();
    let page = source.fetch(PageIndex::new(3)).await;

    assert_eq!(page, FetchedPage::empty());
    assert!(page.is_exhausted());
}

#[tokio::test]
async fn fetch_page_reports_failure() {
    let source = FlakySource::default();
    let err = source.fetch_page(PageIndex::new(1)).await.unwrap_err();
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn no_caching_or_retry() {
    let source = FlakySource::default();
    source.fetch(PageIndex::FIRST).await;
    source.fetch(PageIndex::FIRST).await;
    source.fetch(PageIndex::new(1)).await;

    // Two real fetches of page 0, one failed fetch of page 1, no retries.
    assert_eq!(source.calls.load(Ordering::SeqCst), 3);
}

async fn fetch_via<S: PageDataSource>(source: S, page: PageIndex) -> FetchedPage {
    source.fetch(page).await
}

#[tokio::test]
async fn shared_and_borrowed_sources() {
    let source = Arc::new(FlakySource::default());
    let page = fetch_via(Arc::clone(&source), PageIndex::FIRST).await;
    assert_eq!(page.len(), 2);

    let page = fetch_via(source.as_ref(), PageIndex::new(1)).await;
    assert!(page.is_exhausted());
    assert_eq!(source.calls.load(Ordering::SeqCst), 2);
}
