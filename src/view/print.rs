//! Plain-text rendering of the current page, for `--print`.
//!
//! Same columns, widths and body states as the interactive table, without
//! borders or styling. Trailing spaces are trimmed from every line.

use super::constants::COLUMN_SPACING;
use super::layout::{column_widths, page_cells};
use super::pagination_bar::{page_text, range_text};
use super::table::fit_cell;
use crate::model::{ColumnSpec, Record};
use crate::state::{SortDirection, TableBody, TabularDataView, ViewState};

fn print_header<R>(column: &ColumnSpec<R>, state: &ViewState) -> String {
    let sorted = state
        .sort()
        .filter(|sort| column.is_sortable() && column.source_field() == Some(sort.key.as_str()));
    match sorted.map(|sort| sort.direction) {
        Some(SortDirection::Ascending) => format!("{} ▲", column.header()),
        Some(SortDirection::Descending) => format!("{} ▼", column.header()),
        None => column.header().to_string(),
    }
}

fn join_line(parts: Vec<String>) -> String {
    parts
        .join(&" ".repeat(usize::from(COLUMN_SPACING)))
        .trim_end()
        .to_string()
}

/// The current page as text: header, rule, body, then a footer with the
/// item range and page number.
pub fn render_page_text<R: Record>(view: &TabularDataView<R>) -> String {
    if view.columns().is_empty() {
        return "No columns to display\n".to_string();
    }

    let cells = page_cells(view);
    let widths = column_widths(view, &cells);
    let columns = view.columns();

    let mut lines = vec![
        join_line(
            columns
                .iter()
                .zip(&widths)
                .map(|(column, &width)| {
                    fit_cell(&print_header(column, view.state()), width, column.alignment())
                })
                .collect(),
        ),
        join_line(
            widths
                .iter()
                .map(|&width| "-".repeat(usize::from(width)))
                .collect(),
        ),
    ];

    match view.body() {
        TableBody::Loading { .. } => lines.push("Loading...".to_string()),
        TableBody::NoResults { term } => lines.push(format!("No results for \"{}\"", term.trim())),
        TableBody::Empty => lines.push("No data".to_string()),
        TableBody::Rows(_) => {
            for row in cells {
                lines.push(join_line(
                    row.iter()
                        .zip(&widths)
                        .zip(columns)
                        .map(|((cell, &width), column)| fit_cell(cell, width, column.alignment()))
                        .collect(),
                ));
            }
        }
    }

    let pagination = view.pagination();
    lines.push(String::new());
    lines.push(format!(
        "{} · {}",
        range_text(&pagination),
        page_text(&pagination)
    ));

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Align, Row};

    fn products() -> TabularDataView<Row> {
        TabularDataView::new(vec![
            ColumnSpec::field("ID", "id").align(Align::Right),
            ColumnSpec::field("Name", "name"),
        ])
        .with_data(vec![
            Row::new().with("id", 2i64).with("name", "Gadget"),
            Row::new().with("id", 1i64).with("name", "Widget"),
            Row::new().with("id", 3i64).with("name", "Gizmo"),
        ])
    }

    #[test]
    fn prints_header_rows_and_footer() {
        let mut view = products();
        view.click_header(0);

        insta::assert_snapshot!(render_page_text(&view), @r"
        ID ▲ Name
        ---- ------
           1 Widget
           2 Gadget
           3 Gizmo

        1-3 of 3 · Page 1 of 1
        ");
    }

    #[test]
    fn prints_no_results_message() {
        let mut view = products();
        view.set_search_term("  zzz ");

        let text = render_page_text(&view);
        assert!(text.contains("No results for \"zzz\""));
        assert!(text.ends_with("No items · Page 1 of 1\n"));
    }

    #[test]
    fn prints_empty_message() {
        let view: TabularDataView<Row> = TabularDataView::new(vec![ColumnSpec::field("ID", "id")]);
        assert!(render_page_text(&view).contains("No data"));
    }

    #[test]
    fn prints_without_columns() {
        let view: TabularDataView<Row> = TabularDataView::new(Vec::new());
        assert_eq!(render_page_text(&view), "No columns to display\n");
    }
}
