//! Terminal rendering of pages, selections and settings.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use artview_core::{BulkOutcome, PaginationState, SelectionState, TableState};
use artview_model::{ArtworkRecord, NO_INSCRIPTIONS, TABLE_HEADERS};

use crate::settings::EffectiveSettings;
use crate::types::{BulkReport, PageReport};

pub fn print_page_report(report: &PageReport) {
    println!("{}", page_heading(report.table.pagination()));
    println!("{}", page_table(&report.table));
    if let Some(error) = report.table.pagination().error() {
        eprintln!("error: {error}");
    }
}

pub fn print_bulk_report(report: &BulkReport) {
    println!("{}", page_heading(report.table.pagination()));
    println!("{}", outcome_table(&report.outcome));
    println!("{}", selection_table(report.table.selection()));
    if let Some(error) = report.table.pagination().error() {
        eprintln!("error: {error}");
    }
}

pub fn print_settings(settings: &EffectiveSettings) {
    println!("{}", settings_table(settings));
}

/// "Page N of M: rows a-b of total" line above a page table.
pub fn page_heading(pagination: &PaginationState) -> String {
    let range = match pagination.row_range() {
        Some((start, end)) => format!("rows {start}-{end} of {}", pagination.total_count()),
        None => "no rows".to_string(),
    };
    format!(
        "{} of {}: {range}",
        pagination.current_page(),
        pagination.page_count()
    )
}

/// The displayed page with a selection marker per row.
pub fn page_table(table: &TableState) -> Table {
    let mut out = Table::new();
    let mut header = vec![header_cell(""), header_cell("ID")];
    header.extend(TABLE_HEADERS.iter().map(|label| header_cell(label)));
    out.set_header(header);
    apply_table_style(&mut out);
    align_column(&mut out, 1, CellAlignment::Right);
    align_column(&mut out, 5, CellAlignment::Right);
    align_column(&mut out, 6, CellAlignment::Right);

    for record in table.records() {
        let mut row = vec![
            selected_cell(table.is_selected(record)),
            Cell::new(record.id),
        ];
        row.extend(record_cells(record));
        out.add_row(row);
    }
    out
}

/// All selected records, grouped by page.
pub fn selection_table(selection: &SelectionState) -> Table {
    let mut out = Table::new();
    out.set_header(vec![
        header_cell("Page"),
        header_cell("ID"),
        header_cell("Title"),
        header_cell("Artist"),
    ]);
    apply_selection_table_style(&mut out);
    align_column(&mut out, 1, CellAlignment::Right);

    for (page, record) in selection.selected_records() {
        out.add_row(vec![
            Cell::new(page.api_page()),
            Cell::new(record.id),
            Cell::new(&record.title),
            dim_cell(&record.artist_display),
        ]);
    }
    out.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(selection.selected_count()).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    out
}

/// One-row summary of a bulk select.
pub fn outcome_table(outcome: &BulkOutcome) -> Table {
    let mut out = Table::new();
    out.set_header(vec![
        header_cell("Requested"),
        header_cell("Selected"),
        header_cell("Pages fetched"),
        header_cell("Status"),
    ]);
    apply_selection_table_style(&mut out);
    let status = if outcome.is_complete() {
        Cell::new("complete").fg(Color::Green)
    } else {
        Cell::new("ran out of records").fg(Color::Yellow)
    };
    out.add_row(vec![
        Cell::new(outcome.requested),
        Cell::new(outcome.selected),
        Cell::new(outcome.pages_fetched),
        status,
    ]);
    out
}

/// Effective settings as a two-column table.
pub fn settings_table(settings: &EffectiveSettings) -> Table {
    let mut out = Table::new();
    out.set_header(vec![header_cell("Setting"), header_cell("Value")]);
    apply_selection_table_style(&mut out);

    let file = if settings.file_exists {
        Cell::new(settings.path.display())
    } else {
        dim_cell(format!("{} (not found, using defaults)", settings.path.display()))
    };
    let base_url = if settings.base_url_overridden {
        Cell::new(format!("{} (--base-url)", settings.source.base_url))
    } else {
        Cell::new(&settings.source.base_url)
    };
    out.add_row(vec![Cell::new("settings file"), file]);
    out.add_row(vec![Cell::new("base_url"), base_url]);
    out.add_row(vec![
        Cell::new("timeout_secs"),
        Cell::new(settings.source.timeout_secs),
    ]);
    out.add_row(vec![
        Cell::new("fields"),
        Cell::new(settings.source.fields_param()),
    ]);
    out.add_row(vec![
        Cell::new("page_size"),
        dim_cell(artview_model::PAGE_SIZE),
    ]);
    out
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
    if table.column_count() >= 8 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(3)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::UpperBoundary(Width::Percentage(12)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
        ]);
    }
}

fn apply_selection_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn record_cells(record: &ArtworkRecord) -> Vec<Cell> {
    let [title, artist, origin, start, end, inscriptions] = record.table_cells();
    let inscriptions = if inscriptions == NO_INSCRIPTIONS {
        dim_cell(inscriptions)
    } else {
        Cell::new(inscriptions)
    };
    vec![
        Cell::new(title).add_attribute(Attribute::Bold),
        Cell::new(artist),
        Cell::new(origin),
        Cell::new(start),
        Cell::new(end),
        inscriptions,
    ]
}

fn selected_cell(selected: bool) -> Cell {
    if selected {
        Cell::new("[x]").fg(Color::Green)
    } else {
        dim_cell("[ ]")
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
