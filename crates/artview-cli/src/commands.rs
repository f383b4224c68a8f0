use anyhow::{Context, Result, anyhow};

use artview_core::{SelectionError, TableState};
use artview_model::PageIndex;
use artview_source::{ArticClient, PageDataSource, SourceSettings};

use crate::cli::{BulkArgs, PageArgs};
use artview_cli::types::{BulkReport, PageReport};

#[tracing::instrument(name = "page", skip_all, fields(page = args.page))]
pub async fn run_page(settings: &SourceSettings, args: &PageArgs) -> Result<PageReport> {
    let page = display_page(args.page)?;

    let client = ArticClient::new(settings).context("create artwork client")?;
    let table = load_page(&client, page).await;
    Ok(PageReport { table })
}

#[tracing::instrument(name = "bulk", skip_all, fields(start = args.start, count = args.count))]
pub async fn run_bulk(settings: &SourceSettings, args: &BulkArgs) -> Result<BulkReport> {
    let start = display_page(args.start)?;

    let client = ArticClient::new(settings).context("create artwork client")?;
    let mut table = load_page(&client, start).await;
    let outcome = table
        .bulk_select(args.count, &client)
        .await
        .map_err(|error| match error {
            SelectionError::EmptyBulkRequest => anyhow!("--count must be at least 1"),
            SelectionError::BulkInFlight | SelectionError::PageLoading => anyhow!(error),
        })?;

    Ok(BulkReport { table, outcome })
}

/// Convert a page number typed by a person.
fn display_page(number: usize) -> Result<PageIndex> {
    PageIndex::from_display(number).ok_or_else(|| anyhow!("page numbers start at 1"))
}

/// Fetch one page into a fresh table, degrading failures to an empty page.
async fn load_page<S: PageDataSource>(source: &S, page: PageIndex) -> TableState {
    let mut table = TableState::new();
    let ticket = table.request_page(page);
    match source.fetch_page(page).await {
        Ok(fetched) => {
            table.complete_page(ticket, fetched);
        }
        Err(error) => {
            table.fail_page(ticket, &error);
        }
    }
    table
}
