//! Screen layout and mouse hit-testing.
//!
//! Pure geometry: where each part of the screen goes, how wide each column
//! is, and which header or row a click lands on. The widgets and the event
//! loop both use these so clicks always match what was drawn.

use super::constants::{
    COLUMN_SPACING, MAX_AUTO_COLUMN_WIDTH, MIN_COLUMN_WIDTH, PAGINATION_BAR_HEIGHT,
    SEARCH_INPUT_HEIGHT, STATUS_BAR_HEIGHT,
};
use super::table::header_label;
use crate::model::Record;
use crate::state::TabularDataView;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use unicode_width::UnicodeWidthStr;

/// Areas of the table screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Present only for searchable tables.
    pub search: Option<Rect>,
    /// Bordered table, header row included.
    pub table: Rect,
    /// Single-line pagination bar.
    pub pagination: Rect,
    /// Key hints and load errors.
    pub status: Rect,
}

/// Split the frame into search box, table, pagination bar and status line.
pub fn calculate_areas(frame_area: Rect, searchable: bool) -> ScreenAreas {
    let search_height = if searchable { SEARCH_INPUT_HEIGHT } else { 0 };
    let [search, table, pagination, status] = Layout::vertical([
        Constraint::Length(search_height),
        Constraint::Min(0),
        Constraint::Length(PAGINATION_BAR_HEIGHT),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .areas(frame_area);

    ScreenAreas {
        search: searchable.then_some(search),
        table,
        pagination,
        status,
    }
}

/// Area inside the table border. The header is its first line.
pub fn table_inner(table_area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(table_area)
}

/// Number of body rows that fit under the header.
pub fn visible_body_rows(table_area: Rect) -> usize {
    usize::from(table_inner(table_area).height.saturating_sub(1))
}

/// Cell texts of the current page, one `Vec` per row.
pub fn page_cells<R: Record>(view: &TabularDataView<R>) -> Vec<Vec<String>> {
    view.page_rows().iter().map(|row| view.cells(row)).collect()
}

/// Width of each column.
///
/// A fixed width wins. Otherwise the widest of the header label and the
/// page's cells, kept within `MIN_COLUMN_WIDTH..=MAX_AUTO_COLUMN_WIDTH`.
pub fn column_widths<R: Record>(view: &TabularDataView<R>, cells: &[Vec<String>]) -> Vec<u16> {
    view.columns()
        .iter()
        .enumerate()
        .map(|(i, column)| {
            if let Some(width) = column.fixed_width() {
                return width.max(1);
            }
            let header = header_label(column, view.state()).width();
            let content = cells
                .iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.width())
                .max()
                .unwrap_or(0);
            let widest = u16::try_from(header.max(content)).unwrap_or(u16::MAX);
            widest.clamp(MIN_COLUMN_WIDTH, MAX_AUTO_COLUMN_WIDTH)
        })
        .collect()
}

/// Clip widths so the columns, with spacing, fit in `available` cells.
///
/// Columns that no longer fit get width 0.
pub fn fit_widths(widths: &[u16], available: u16) -> Vec<u16> {
    let mut remaining = available;
    widths
        .iter()
        .enumerate()
        .map(|(i, &width)| {
            if i > 0 {
                remaining = remaining.saturating_sub(COLUMN_SPACING);
            }
            let fitted = width.min(remaining);
            remaining -= fitted;
            fitted
        })
        .collect()
}

/// Column whose cells span screen column `x`.
pub fn column_at(inner: Rect, widths: &[u16], x: u16) -> Option<usize> {
    let mut start = inner.x;
    for (i, &width) in widths.iter().enumerate() {
        let end = start.saturating_add(width);
        if width > 0 && x >= start && x < end {
            return Some(i);
        }
        start = end.saturating_add(COLUMN_SPACING);
    }
    None
}

/// Header cell under a click, if any.
pub fn header_hit(table_area: Rect, widths: &[u16], x: u16, y: u16) -> Option<usize> {
    let inner = table_inner(table_area);
    if y != inner.y || inner.height == 0 {
        return None;
    }
    column_at(inner, widths, x)
}

/// Index on the current page of the body row under a click, if any.
pub fn row_hit(table_area: Rect, rows_on_page: usize, x: u16, y: u16) -> Option<usize> {
    let inner = table_inner(table_area);
    let body_top = inner.y.saturating_add(1);
    if x < inner.x || x >= inner.right() || y < body_top || y >= inner.bottom() {
        return None;
    }
    let index = usize::from(y - body_top);
    (index < rows_on_page).then_some(index)
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
