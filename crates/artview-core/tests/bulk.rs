//! Bulk selection across pages.

mod common;

use artview_core::{BulkSelectRequest, SelectionState, collect_bulk_selection};
use artview_model::{ArtworkId, PAGE_SIZE, PageIndex};
use common::{MemorySource, ids};

fn request(count: usize) -> BulkSelectRequest {
    BulkSelectRequest::new(count).unwrap()
}

#[tokio::test]
async fn fifteen_rows_from_the_first_page() {
    let source = MemorySource::with_total(100);
    let loaded = source.page(PageIndex::FIRST).records;
    let mut selection = SelectionState::new();

    let outcome = selection
        .bulk_select(PageIndex::FIRST, request(15), PAGE_SIZE, &loaded, &source)
        .await;

    let first: Vec<_> = (1..=12).map(ArtworkId).collect();
    assert_eq!(selection.selected_ids_on(PageIndex::new(0)), first);
    assert_eq!(
        selection.selected_ids_on(PageIndex::new(1)),
        vec![ArtworkId(13), ArtworkId(14), ArtworkId(15)]
    );
    assert_eq!(selection.pages().count(), 2);
    assert_eq!(outcome.selected, 15);
    assert_eq!(outcome.pages_fetched, 1);
    assert!(outcome.is_complete());
    assert_eq!(source.fetched(), vec![PageIndex::new(1)]);
}

#[tokio::test]
async fn count_within_one_page_issues_no_fetch() {
    let source = MemorySource::with_total(100);
    let start = PageIndex::new(3);
    let loaded = source.page(start).records;
    let mut selection = SelectionState::new();

    let outcome = selection
        .bulk_select(start, request(5), PAGE_SIZE, &loaded, &source)
        .await;

    assert_eq!(selection.selected_count(), 5);
    assert_eq!(selection.pages().collect::<Vec<_>>(), vec![start]);
    assert_eq!(
        selection.selected_ids_on(start),
        (37..=41).map(ArtworkId).collect::<Vec<_>>()
    );
    assert_eq!(outcome.pages_fetched, 0);
    assert!(source.fetched().is_empty());
}

#[tokio::test]
async fn exactly_one_page_issues_no_fetch() {
    let source = MemorySource::with_total(100);
    let loaded = source.page(PageIndex::FIRST).records;

    let plan =
        collect_bulk_selection(&source, PageIndex::FIRST, request(12), PAGE_SIZE, &loaded).await;

    assert_eq!(plan.selected(), 12);
    assert!(source.fetched().is_empty());
}

#[tokio::test]
async fn spill_splits_twelve_twelve_one() {
    let source = MemorySource::with_total(100);
    let loaded = source.page(PageIndex::FIRST).records;

    let plan =
        collect_bulk_selection(&source, PageIndex::FIRST, request(25), PAGE_SIZE, &loaded).await;

    let sizes: Vec<_> = plan
        .assignments()
        .iter()
        .map(|(page, records)| (page.get(), records.len()))
        .collect();
    assert_eq!(sizes, vec![(0, 12), (1, 12), (2, 1)]);
    assert_eq!(ids(&plan.assignments()[2].1), vec![25]);
    assert_eq!(source.fetched(), vec![PageIndex::new(1), PageIndex::new(2)]);
}

#[tokio::test]
async fn empty_next_page_stops_the_loop() {
    // Twelve records in total: page 1 is already empty.
    let source = MemorySource::with_total(12);
    let loaded = source.page(PageIndex::FIRST).records;
    let mut selection = SelectionState::new();

    let outcome = selection
        .bulk_select(PageIndex::FIRST, request(40), PAGE_SIZE, &loaded, &source)
        .await;

    assert_eq!(outcome.selected, 12);
    assert!(outcome.exhausted);
    assert!(!outcome.is_complete());
    assert_eq!(source.fetched(), vec![PageIndex::new(1)]);
    assert!(selection.selected_on(PageIndex::new(1)).is_none());
}

#[tokio::test]
async fn fetch_failure_keeps_partial_selection() {
    let source = MemorySource::with_total(100).failing_on(PageIndex::new(2));
    let loaded = source.page(PageIndex::FIRST).records;
    let mut selection = SelectionState::new();

    let outcome = selection
        .bulk_select(PageIndex::FIRST, request(30), PAGE_SIZE, &loaded, &source)
        .await;

    assert_eq!(outcome.selected, 24);
    assert!(outcome.exhausted);
    assert_eq!(
        selection.pages().collect::<Vec<_>>(),
        vec![PageIndex::new(0), PageIndex::new(1)]
    );
    // No retry of the failing page.
    assert_eq!(source.fetched(), vec![PageIndex::new(1), PageIndex::new(2)]);
}

#[tokio::test]
async fn bulk_replaces_prior_selection_on_assigned_pages_only() {
    let source = MemorySource::with_total(100);
    let loaded = source.page(PageIndex::FIRST).records;
    let mut selection = SelectionState::new();

    selection.toggle_record(PageIndex::new(0), &loaded[11]);
    let far = source.page(PageIndex::new(5)).records;
    selection.toggle_record(PageIndex::new(5), &far[0]);

    selection
        .bulk_select(PageIndex::FIRST, request(3), PAGE_SIZE, &loaded, &source)
        .await;

    assert_eq!(
        selection.selected_ids_on(PageIndex::new(0)),
        vec![ArtworkId(1), ArtworkId(2), ArtworkId(3)]
    );
    assert!(selection.is_selected(PageIndex::new(5), far[0].id));
}

#[tokio::test]
async fn plan_is_not_applied_until_requested() {
    let source = MemorySource::with_total(100);
    let loaded = source.page(PageIndex::FIRST).records;
    let mut selection = SelectionState::new();

    let plan =
        collect_bulk_selection(&source, PageIndex::FIRST, request(20), PAGE_SIZE, &loaded).await;
    assert!(selection.is_empty());

    let outcome = selection.apply_bulk(plan);
    assert_eq!(outcome.selected, 20);
    assert_eq!(selection.selected_count(), 20);
}
