//! Data table component.
//!
//! A header row and striped data rows sharing column widths, with a fixed
//! leading column for per-row controls such as checkboxes.

use iced::widget::{column, container, row, rule, scrollable, text};
use iced::{Alignment, Element, Length, Theme};

use crate::theme::{
    CHECKBOX_COLUMN_WIDTH, GalleryColors, TABLE_CELL_PADDING_X, TABLE_CELL_PADDING_Y,
};

// =============================================================================
// TABLE COLUMN
// =============================================================================

/// Column definition for data table.
pub struct TableColumn {
    /// Column header text
    pub header: String,
    /// Column width
    pub width: Length,
}

impl TableColumn {
    /// Create a new column with fixed width.
    pub fn fixed(header: impl Into<String>, width: f32) -> Self {
        Self {
            header: header.into(),
            width: Length::Fixed(width),
        }
    }

    /// Create a new column that fills available space.
    pub fn fill(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            width: Length::Fill,
        }
    }

    /// Create a new column with proportional width.
    pub fn portion(header: impl Into<String>, portion: u16) -> Self {
        Self {
            header: header.into(),
            width: Length::FillPortion(portion),
        }
    }
}

// =============================================================================
// TABLE ROW
// =============================================================================

/// One data row: the leading control plus one string per column.
pub struct TableRow<'a, M> {
    /// Widget in the leading column
    pub leading: Element<'a, M>,
    /// Cell text, in column order
    pub cells: Vec<String>,
    /// Whether to highlight the row
    pub selected: bool,
    /// Cells rendered with the muted text color
    pub muted: Vec<usize>,
}

impl<'a, M> TableRow<'a, M> {
    pub fn new(leading: impl Into<Element<'a, M>>, cells: Vec<String>) -> Self {
        Self {
            leading: leading.into(),
            cells,
            selected: false,
            muted: Vec::new(),
        }
    }

    #[must_use]
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Render cell `index` with the muted text color.
    #[must_use]
    pub fn muted(mut self, index: usize) -> Self {
        self.muted.push(index);
        self
    }
}

// =============================================================================
// DATA TABLE
// =============================================================================

/// Creates a table with a leading control column.
///
/// # Arguments
///
/// * `columns` - Column definitions, excluding the leading column
/// * `header_leading` - Widget above the leading column (e.g. select-all)
/// * `rows` - Data rows
///
/// # Example
///
/// ```rust,ignore
/// let columns = vec![TableColumn::portion("Title", 3), TableColumn::fixed("Start", 80.0)];
/// let rows = records
///     .iter()
///     .map(|r| TableRow::new(checkbox(selected(r)), vec![r.title.clone(), r.date_start.to_string()]))
///     .collect();
///
/// data_table(&columns, header_checkbox, rows)
/// ```
pub fn data_table<'a, M: 'a>(
    columns: &[TableColumn],
    header_leading: Element<'a, M>,
    rows: Vec<TableRow<'a, M>>,
) -> Element<'a, M> {
    // Header row
    let mut header = row![leading_cell(header_leading)]
        .spacing(0)
        .align_y(Alignment::Center);
    for col in columns {
        header = header.push(
            container(
                text(col.header.clone())
                    .size(12)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.gallery().text_muted),
                    }),
            )
            .width(col.width)
            .padding([TABLE_CELL_PADDING_Y, TABLE_CELL_PADDING_X]),
        );
    }
    let header = container(header)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.gallery().background_secondary.into()),
            ..Default::default()
        });

    // Data rows
    let mut data_rows = column![].spacing(0);
    for (row_idx, table_row) in rows.into_iter().enumerate() {
        let TableRow {
            leading,
            cells,
            selected,
            muted,
        } = table_row;
        let is_even = row_idx % 2 == 0;

        let mut data_row = row![leading_cell(leading)]
            .spacing(0)
            .align_y(Alignment::Center);
        for (col_idx, cell) in cells.into_iter().enumerate() {
            let width = columns.get(col_idx).map_or(Length::Fill, |c| c.width);
            let is_muted = muted.contains(&col_idx);

            data_row = data_row.push(
                container(text(cell).size(13).style(move |theme: &Theme| {
                    let gallery = theme.gallery();
                    text::Style {
                        color: Some(if is_muted {
                            gallery.text_muted
                        } else {
                            gallery.text_secondary
                        }),
                    }
                }))
                .width(width)
                .padding([TABLE_CELL_PADDING_Y, TABLE_CELL_PADDING_X]),
            );
        }

        data_rows = data_rows.push(container(data_row).width(Length::Fill).style(
            move |theme: &Theme| {
                let gallery = theme.gallery();
                let background = if selected {
                    gallery.row_selected
                } else if is_even {
                    gallery.background_elevated
                } else {
                    gallery.row_alternate
                };
                container::Style {
                    background: Some(background.into()),
                    ..Default::default()
                }
            },
        ));
    }

    column![
        header,
        rule::horizontal(1).style(|theme: &Theme| rule::Style {
            color: theme.gallery().border_default,
            radius: 0.0.into(),
            fill_mode: rule::FillMode::Full,
            snap: true,
        }),
        scrollable(data_rows).height(Length::Fill),
    ]
    .spacing(0)
    .into()
}

fn leading_cell<'a, M: 'a>(content: Element<'a, M>) -> Element<'a, M> {
    container(content)
        .width(Length::Fixed(CHECKBOX_COLUMN_WIDTH))
        .padding([TABLE_CELL_PADDING_Y, TABLE_CELL_PADDING_X])
        .into()
}
