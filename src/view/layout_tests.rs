//! Tests for screen layout and hit-testing.

use super::*;
use crate::model::{ColumnSpec, Row};

// ===== Test Helpers =====

fn frame() -> Rect {
    Rect::new(0, 0, 80, 24)
}

fn people() -> TabularDataView<Row> {
    TabularDataView::new(vec![
        ColumnSpec::field("ID", "id"),
        ColumnSpec::field("Name", "name"),
    ])
    .with_data(vec![
        Row::new().with("id", 1i64).with("name", "Alice Wonderland"),
        Row::new().with("id", 2i64).with("name", "Bob"),
    ])
}

// ===== calculate_areas =====

#[test]
fn searchable_layout_stacks_search_table_pagination_status() {
    let areas = calculate_areas(frame(), true);

    assert_eq!(areas.search, Some(Rect::new(0, 0, 80, 3)));
    assert_eq!(areas.table, Rect::new(0, 3, 80, 19));
    assert_eq!(areas.pagination, Rect::new(0, 22, 80, 1));
    assert_eq!(areas.status, Rect::new(0, 23, 80, 1));
}

#[test]
fn non_searchable_layout_gives_search_space_to_table() {
    let areas = calculate_areas(frame(), false);

    assert_eq!(areas.search, None);
    assert_eq!(areas.table, Rect::new(0, 0, 80, 22));
}

#[test]
fn body_rows_exclude_border_and_header() {
    let table = Rect::new(0, 3, 80, 19);
    assert_eq!(table_inner(table), Rect::new(1, 4, 78, 17));
    assert_eq!(visible_body_rows(table), 16);
    assert_eq!(visible_body_rows(Rect::new(0, 0, 10, 2)), 0);
}

// ===== Column widths =====

#[test]
fn widths_fit_header_and_content() {
    let view = people();
    let cells = page_cells(&view);

    // "ID ⇅" is wider than the ids; the longest name beats "Name ⇅".
    assert_eq!(column_widths(&view, &cells), vec![4, 16]);
}

#[test]
fn widths_are_clamped() {
    let view = TabularDataView::new(vec![
        ColumnSpec::new("A"),
        ColumnSpec::field("Notes", "notes"),
    ])
    .with_data(vec![Row::new().with("notes", "x".repeat(200))]);
    let cells = page_cells(&view);

    let widths = column_widths(&view, &cells);
    assert_eq!(widths, vec![MIN_COLUMN_WIDTH, MAX_AUTO_COLUMN_WIDTH]);
}

#[test]
fn fixed_width_wins() {
    let view: TabularDataView<Row> =
        TabularDataView::new(vec![ColumnSpec::field("Name", "name").width(12)])
            .with_data(vec![Row::new().with("name", "x".repeat(50))]);
    let cells = page_cells(&view);

    assert_eq!(column_widths(&view, &cells), vec![12]);
}

#[test]
fn widths_are_fitted_with_spacing() {
    assert_eq!(fit_widths(&[4, 16, 10], 25), vec![4, 16, 3]);
    assert_eq!(fit_widths(&[4, 16], 4), vec![4, 0]);
    assert_eq!(fit_widths(&[4, 16], 100), vec![4, 16]);
}

// ===== Hit-testing =====

#[test]
fn column_at_skips_spacing() {
    let inner = Rect::new(1, 4, 78, 17);
    let widths = [4, 16];

    assert_eq!(column_at(inner, &widths, 1), Some(0));
    assert_eq!(column_at(inner, &widths, 4), Some(0));
    assert_eq!(column_at(inner, &widths, 5), None);
    assert_eq!(column_at(inner, &widths, 6), Some(1));
    assert_eq!(column_at(inner, &widths, 21), Some(1));
    assert_eq!(column_at(inner, &widths, 22), None);
}

#[test]
fn hidden_columns_are_never_hit() {
    let inner = Rect::new(0, 0, 10, 5);
    assert_eq!(column_at(inner, &[4, 0], 5), None);
}

#[test]
fn header_hit_only_on_header_line() {
    let table = Rect::new(0, 3, 80, 19);
    let widths = [4, 16];

    assert_eq!(header_hit(table, &widths, 2, 4), Some(0));
    assert_eq!(header_hit(table, &widths, 10, 4), Some(1));
    assert_eq!(header_hit(table, &widths, 2, 3), None);
    assert_eq!(header_hit(table, &widths, 2, 5), None);
}

#[test]
fn row_hit_maps_to_page_index() {
    let table = Rect::new(0, 3, 80, 19);

    assert_eq!(row_hit(table, 3, 2, 5), Some(0));
    assert_eq!(row_hit(table, 3, 2, 7), Some(2));
    assert_eq!(row_hit(table, 3, 2, 8), None);
    // Header line and borders are not rows.
    assert_eq!(row_hit(table, 3, 2, 4), None);
    assert_eq!(row_hit(table, 3, 0, 5), None);
    assert_eq!(row_hit(table, 3, 79, 5), None);
}
