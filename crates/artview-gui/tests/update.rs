//! Message handling through `App::update`, without a network.

use artview_core::TableState;
use artview_gui::App;
use artview_gui::error::GuiError;
use artview_gui::message::{BulkMessage, Message, TableMessage};
use artview_gui::state::{AppState, Settings};
use artview_model::{ArtworkId, ArtworkRecord, FetchedPage, PAGE_SIZE, PageIndex};
use artview_source::{PageDataSource, Result, SourceError};

fn record(id: u64) -> ArtworkRecord {
    ArtworkRecord {
        id: ArtworkId(id),
        title: format!("Artwork {id}"),
        artist_display: "Unknown".to_string(),
        place_of_origin: "Chicago".to_string(),
        inscriptions: None,
        date_start: 1900,
        date_end: 1900,
    }
}

fn page(index: usize, total: u64) -> FetchedPage {
    let start = (index * PAGE_SIZE) as u64 + 1;
    let end = (start + PAGE_SIZE as u64 - 1).min(total);
    FetchedPage::new((start..=end).map(record).collect(), total)
}

/// Collection of `total` artworks served twelve per page.
struct Collection {
    total: u64,
}

impl PageDataSource for Collection {
    async fn fetch_page(&self, index: PageIndex) -> Result<FetchedPage> {
        Ok(page(index.get(), self.total))
    }
}

/// State showing page `index` of a `total`-record collection.
fn state_on_page(index: usize, total: u64) -> AppState {
    let mut state = AppState::offline(Settings::default());
    let ticket = state.table.request_page(PageIndex::new(index));
    state.table.complete_page(ticket, page(index, total));
    state
}

/// Like [`state_on_page`], but with an HTTP client that is never polled.
fn connected_state_on_page(index: usize, total: u64) -> AppState {
    let mut state = AppState::new(Settings::default());
    let ticket = state.table.request_page(PageIndex::new(index));
    state.table.complete_page(ticket, page(index, total));
    state
}

fn app_on_page(index: usize, total: u64) -> App {
    App::from_state(state_on_page(index, total))
}

fn table(app: &App) -> &TableState {
    &app.state().table
}

#[test]
fn page_result_fills_the_table() {
    let app = app_on_page(1, 30);

    assert_eq!(table(&app).current_page(), PageIndex::new(1));
    assert_eq!(table(&app).records().len(), 12);
    assert_eq!(table(&app).total_count(), 30);
    assert!(!table(&app).is_loading());
}

#[test]
fn stale_page_result_is_dropped() {
    let mut state = AppState::offline(Settings::default());
    let first = state.table.request_page(PageIndex::new(0));
    let second = state.table.request_page(PageIndex::new(1));
    let mut app = App::from_state(state);

    let _ = app.update(Message::PageLoaded {
        ticket: second,
        result: Ok(page(1, 30)),
    });
    let _ = app.update(Message::PageLoaded {
        ticket: first,
        result: Ok(page(0, 30)),
    });

    assert_eq!(table(&app).current_page(), PageIndex::new(1));
    assert_eq!(table(&app).records()[0].id, ArtworkId(13));
}

#[test]
fn failed_fetch_shows_banner_until_dismissed() {
    let mut state = AppState::offline(Settings::default());
    let ticket = state.table.request_page(PageIndex::FIRST);
    let mut app = App::from_state(state);

    let _ = app.update(Message::PageLoaded {
        ticket,
        result: Err(SourceError::Status {
            status: 503,
            url: "http://localhost/api/v1/artworks".to_string(),
        }),
    });
    assert!(table(&app).records().is_empty());
    assert_eq!(table(&app).total_count(), 0);
    let banner = table(&app).pagination().error().unwrap();
    assert!(banner.contains("try again later"));

    let _ = app.update(Message::Table(TableMessage::DismissError));
    assert!(table(&app).pagination().error().is_none());
}

#[test]
fn checkboxes_update_selection() {
    let mut app = app_on_page(0, 30);

    let _ = app.update(Message::Table(TableMessage::RowToggled(ArtworkId(3))));
    assert!(table(&app).selection().is_selected(PageIndex::FIRST, ArtworkId(3)));
    assert_eq!(app.title(), "Artview - 1 selected");

    let _ = app.update(Message::Table(TableMessage::SelectAllToggled(true)));
    assert!(table(&app).is_page_fully_selected());
    assert_eq!(table(&app).selection().selected_count(), 12);

    let _ = app.update(Message::Table(TableMessage::SelectAllToggled(false)));
    assert!(table(&app).selection().is_empty());
    assert_eq!(app.title(), "Artview");
}

#[test]
fn checkboxes_are_ignored_while_a_page_loads() {
    let mut state = state_on_page(0, 30);
    // Rows of page 0 are still on screen while page 1 loads.
    state.table.request_page(PageIndex::new(1));
    let mut app = App::from_state(state);

    let _ = app.update(Message::Table(TableMessage::RowToggled(ArtworkId(1))));
    let _ = app.update(Message::Table(TableMessage::SelectAllToggled(true)));

    assert!(table(&app).selection().is_empty());
}

#[test]
fn clear_selection_drops_every_page_and_the_status() {
    let mut state = state_on_page(0, 30);
    state.table.toggle_select_all(true);
    state.status = Some("Selected 12 rows".to_string());
    let mut app = App::from_state(state);

    let _ = app.update(Message::Table(TableMessage::ClearSelection));
    assert!(table(&app).selection().is_empty());
    assert!(app.state().status.is_none());
}

#[test]
fn navigation_without_a_client_issues_no_request() {
    let mut app = app_on_page(0, 30);

    let _ = app.update(Message::Table(TableMessage::NextPage));
    let _ = app.update(Message::Table(TableMessage::Retry));

    assert_eq!(table(&app).current_page(), PageIndex::FIRST);
    assert!(!table(&app).is_loading());
}

#[test]
fn bulk_popover_validates_the_count() {
    let mut app = app_on_page(0, 30);

    let _ = app.update(Message::Bulk(BulkMessage::Toggle));
    assert!(app.state().bulk.open);

    let _ = app.update(Message::Bulk(BulkMessage::CountChanged("abc".to_string())));
    let _ = app.update(Message::Bulk(BulkMessage::Submit));
    assert_eq!(app.state().bulk.error, Some(GuiError::InvalidBulkCount));
    assert!(!table(&app).is_bulk_in_flight());

    // Editing clears the message
    let _ = app.update(Message::Bulk(BulkMessage::CountChanged("0".to_string())));
    assert!(app.state().bulk.error.is_none());

    let _ = app.update(Message::Bulk(BulkMessage::Close));
    assert!(!app.state().bulk.open);
    assert!(app.state().bulk.input.is_empty());
}

#[test]
fn bulk_submit_without_a_client_keeps_the_gate_open() {
    let mut app = app_on_page(0, 30);
    let _ = app.update(Message::Bulk(BulkMessage::Toggle));
    let _ = app.update(Message::Bulk(BulkMessage::CountChanged("5".to_string())));
    let _ = app.update(Message::Bulk(BulkMessage::Submit));

    assert!(matches!(app.state().bulk.error, Some(GuiError::Client { .. })));
    assert!(!table(&app).is_bulk_in_flight());
}

#[test]
fn bulk_submit_while_a_page_loads_is_refused() {
    let mut state = connected_state_on_page(0, 30);
    assert!(state.client.is_some());
    state.table.request_page(PageIndex::new(1));
    let mut app = App::from_state(state);

    let _ = app.update(Message::Bulk(BulkMessage::Toggle));
    let _ = app.update(Message::Bulk(BulkMessage::CountChanged("5".to_string())));
    let _ = app.update(Message::Bulk(BulkMessage::Submit));

    assert!(matches!(
        app.state().bulk.error,
        Some(GuiError::BulkUnavailable { .. })
    ));
    assert!(!table(&app).is_bulk_in_flight());
    assert!(table(&app).selection().is_empty());
}

#[test]
fn numbered_page_link_requests_that_page() {
    let mut app = App::from_state(connected_state_on_page(0, 120));

    let _ = app.update(Message::Table(TableMessage::GoToPage(PageIndex::new(0))));
    assert!(!table(&app).is_loading());

    let _ = app.update(Message::Table(TableMessage::GoToPage(PageIndex::new(10))));
    assert!(!table(&app).is_loading());

    let _ = app.update(Message::Table(TableMessage::GoToPage(PageIndex::new(4))));
    assert!(table(&app).is_loading());
    assert_eq!(table(&app).current_page(), PageIndex::new(4));
}

#[tokio::test]
async fn finished_bulk_applies_plan_and_closes_popover() {
    let mut state = state_on_page(0, 30);
    state.bulk.open();
    state.bulk.input = "25".to_string();
    let job = state.table.begin_bulk(25).unwrap();
    let mut app = App::from_state(state);

    // Trigger is disabled while the walk runs
    let _ = app.update(Message::Bulk(BulkMessage::Toggle));
    assert!(!app.state().bulk.open);
    let _ = app.update(Message::Bulk(BulkMessage::Toggle));
    assert!(!app.state().bulk.open);

    let plan = job.run(&Collection { total: 30 }).await;
    let _ = app.update(Message::Bulk(BulkMessage::Finished(plan)));

    let selection = table(&app).selection();
    assert_eq!(selection.selected_count(), 25);
    assert_eq!(selection.selected_ids_on(PageIndex::new(2)), vec![ArtworkId(25)]);
    assert!(!table(&app).is_bulk_in_flight());
    assert!(!app.state().bulk.open);
    assert_eq!(app.state().status.as_deref(), Some("Selected 25 rows"));
}

#[tokio::test]
async fn exhausted_bulk_reports_the_shortfall() {
    let mut state = state_on_page(1, 20);
    let job = state.table.begin_bulk(30).unwrap();
    let mut app = App::from_state(state);

    let plan = job.run(&Collection { total: 20 }).await;
    let _ = app.update(Message::Bulk(BulkMessage::Finished(plan)));

    assert_eq!(table(&app).selection().selected_count(), 8);
    assert_eq!(
        app.state().status.as_deref(),
        Some("Selected 8 of 30 rows; no more artworks to select")
    );
}

#[test]
fn dismiss_status_keeps_client_errors() {
    let mut state = AppState::offline(Settings::default());
    state.status = Some("Selected 3 rows".to_string());
    state.error = Some(GuiError::client("invalid base URL"));
    let mut app = App::from_state(state);

    let _ = app.update(Message::DismissStatus);
    assert!(app.state().status.is_none());
    assert!(app.state().error.is_some());

    let mut state = AppState::offline(Settings::default());
    state.error = Some(GuiError::settings_save("read-only file system"));
    let mut app = App::from_state(state);
    let _ = app.update(Message::DismissStatus);
    assert!(app.state().error.is_none());
}
