//! Snapshot tests for the table widget
//!
//! Uses insta + ratatui TestBackend to verify rendering output doesn't regress.
//! These tests capture each body state of the table (rows, loading, no
//! results, empty) and protect against accidental UI changes.

use ratatui::backend::TestBackend;
use ratatui::style::{Color, Modifier};
use ratatui::Terminal;
use tabview::model::{Align, ColumnSpec, Row};
use tabview::state::TabularDataView;
use tabview::view::{ColorConfig, TableStyles, TableWidget};

// ===== Test Helpers =====

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty trailing lines are removed to keep snapshots clean.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Create a test terminal with the given dimensions.
fn create_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).unwrap()
}

fn columns() -> Vec<ColumnSpec<Row>> {
    vec![
        ColumnSpec::field("ID", "id").align(Align::Right),
        ColumnSpec::field("Name", "name"),
    ]
}

fn products() -> Vec<Row> {
    [(1i64, "Widget"), (2, "Gadget"), (3, "Gizmo")]
        .into_iter()
        .map(|(id, name)| Row::new().with("id", id).with("name", name))
        .collect()
}

fn render(
    view: &TabularDataView<Row>,
    styles: &TableStyles,
    width: u16,
    height: u16,
    selected: Option<usize>,
) -> Terminal<TestBackend> {
    let mut terminal = create_terminal(width, height);
    terminal
        .draw(|frame| {
            let widget = TableWidget::new(view, styles)
                .title("Products")
                .selected_row(selected);
            frame.render_widget(widget, frame.area());
        })
        .unwrap();
    terminal
}

// ===== Body States =====

#[test]
fn snapshot_table_with_rows() {
    let view = TabularDataView::new(columns()).with_data(products());
    let terminal = render(&view, &TableStyles::default(), 24, 7, None);

    insta::assert_snapshot!(buffer_to_string(terminal.backend().buffer()), @r"
    ┌ Products ────────────┐
    │ID ⇅ Name ⇅           │
    │   1 Widget           │
    │   2 Gadget           │
    │   3 Gizmo            │
    │                      │
    └──────────────────────┘
    ");
}

#[test]
fn snapshot_table_loading_shows_skeleton_rows() {
    let view = TabularDataView::new(columns()).loading(true);
    let terminal = render(&view, &TableStyles::default(), 24, 9, None);

    insta::assert_snapshot!(buffer_to_string(terminal.backend().buffer()), @r"
    ┌ Products ────────────┐
    │ID ⇅ Name ⇅           │
    │░░░░ ░░░░░░           │
    │░░░░ ░░░░░░           │
    │░░░░ ░░░░░░           │
    │░░░░ ░░░░░░           │
    │░░░░ ░░░░░░           │
    │░░░░ ░░░░░░           │
    └──────────────────────┘
    ");
}

#[test]
fn snapshot_table_no_results() {
    let mut view = TabularDataView::new(columns()).with_data(products());
    view.set_search_term("zzz");
    let terminal = render(&view, &TableStyles::default(), 24, 6, None);

    insta::assert_snapshot!(buffer_to_string(terminal.backend().buffer()), @r#"
    ┌ Products ────────────┐
    │ID ⇅ Name ⇅           │
    │                      │
    │ No results for "zzz" │
    │                      │
    └──────────────────────┘
    "#);
}

#[test]
fn snapshot_table_empty() {
    let view = TabularDataView::new(columns());
    let terminal = render(&view, &TableStyles::default(), 24, 6, None);

    insta::assert_snapshot!(buffer_to_string(terminal.backend().buffer()), @r"
    ┌ Products ────────────┐
    │ID ⇅ Name ⇅           │
    │                      │
    │        No data       │
    │                      │
    └──────────────────────┘
    ");
}

#[test]
fn snapshot_narrow_table_truncates_last_column() {
    let rows = vec![Row::new().with("id", 1i64).with("name", "Widget")];
    let view = TabularDataView::new(columns()).with_data(rows);
    let mut terminal = create_terminal(12, 4);
    terminal
        .draw(|frame| {
            let styles = TableStyles::default();
            frame.render_widget(TableWidget::new(&view, &styles), frame.area());
        })
        .unwrap();

    insta::assert_snapshot!(buffer_to_string(terminal.backend().buffer()), @r"
    ┌──────────┐
    │ID ⇅ Name…│
    │   1 Widg…│
    └──────────┘
    ");
}

// ===== Styling =====

#[test]
fn selected_row_is_reversed_without_colors() {
    let view = TabularDataView::new(columns()).with_data(products());
    let styles = TableStyles::with_color_config(ColorConfig::new(false));
    let terminal = render(&view, &styles, 24, 7, Some(1));
    let buffer = terminal.backend().buffer();

    // Border, header, first row, then the selected second row.
    assert!(buffer[(4, 3)].modifier.contains(Modifier::REVERSED));
    assert!(!buffer[(4, 2)].modifier.contains(Modifier::REVERSED));
}

#[test]
fn row_class_colors_matching_rows() {
    let view = TabularDataView::new(columns())
        .with_data(products())
        .row_class(|row: &Row| {
            (row.get("name").map(|v| v.string_form()).as_deref() == Some("Gadget"))
                .then(|| "danger".to_string())
        });
    let terminal = render(&view, &TableStyles::default(), 24, 7, None);
    let buffer = terminal.backend().buffer();

    assert_eq!(buffer[(6, 3)].fg, Color::Red);
    assert_ne!(buffer[(6, 2)].fg, Color::Red);
}
