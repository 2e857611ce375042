//! Table widget: header with sort indicators, then the body state.

use super::constants::COLUMN_SPACING;
use super::layout::{column_widths, fit_widths, page_cells};
use super::styles::TableStyles;
use crate::model::{Align, ColumnSpec, Record};
use crate::state::{SortDirection, TableBody, TabularDataView, ViewState};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ASCENDING: &str = "▲";
const DESCENDING: &str = "▼";
const UNSORTED: &str = "⇅";
const SKELETON_CELL: char = '░';

/// Header text with its sort indicator.
///
/// Sortable columns always show one: `▲`/`▼` on the active sort column,
/// `⇅` elsewhere. Display-only and non-sortable columns show none.
pub fn header_label<R>(column: &ColumnSpec<R>, state: &ViewState) -> String {
    if !column.is_sortable() {
        return column.header().to_string();
    }
    let indicator = match (column.source_field(), state.sort()) {
        (Some(field), Some(sort)) if sort.key == field => match sort.direction {
            SortDirection::Ascending => ASCENDING,
            SortDirection::Descending => DESCENDING,
        },
        _ => UNSORTED,
    };
    format!("{} {}", column.header(), indicator)
}

/// Fit `text` into exactly `width` cells: truncate with `…` or pad per
/// alignment. Line breaks and tabs become spaces.
pub fn fit_cell(text: &str, width: u16, align: Align) -> String {
    let width = usize::from(width);
    if width == 0 {
        return String::new();
    }
    let flat: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();

    let text_width = flat.width();
    if text_width > width {
        let mut out = String::new();
        let mut used = 0;
        for c in flat.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > width - 1 {
                break;
            }
            out.push(c);
            used += w;
        }
        out.push('…');
        out.push_str(&" ".repeat(width - 1 - used));
        return out;
    }

    let pad = width - text_width;
    let (left, right) = match align {
        Align::Left => (0, pad),
        Align::Right => (pad, 0),
        Align::Center => (pad / 2, pad - pad / 2),
    };
    format!("{}{}{}", " ".repeat(left), flat, " ".repeat(right))
}

fn join_cells<I>(cells: I) -> String
where
    I: IntoIterator<Item = String>,
{
    cells
        .into_iter()
        .collect::<Vec<_>>()
        .join(&" ".repeat(usize::from(COLUMN_SPACING)))
}

/// Renders a [`TabularDataView`] inside a bordered block.
///
/// The header row lists every column with its sort indicator. The body shows
/// skeleton rows while loading, a message when there is nothing to show, or
/// the current page.
pub struct TableWidget<'a, R> {
    view: &'a TabularDataView<R>,
    styles: &'a TableStyles,
    title: Option<&'a str>,
    focused_column: Option<usize>,
    selected_row: Option<usize>,
}

impl<'a, R: Record> TableWidget<'a, R> {
    /// Widget over `view`, untitled, with no cursor or selection.
    pub fn new(view: &'a TabularDataView<R>, styles: &'a TableStyles) -> Self {
        Self {
            view,
            styles,
            title: None,
            focused_column: None,
            selected_row: None,
        }
    }

    /// Title drawn into the top border.
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Column under the header cursor.
    pub fn focused_column(mut self, column: Option<usize>) -> Self {
        self.focused_column = column;
        self
    }

    /// Selected row, as an index on the current page.
    pub fn selected_row(mut self, row: Option<usize>) -> Self {
        self.selected_row = row;
        self
    }

    fn header_line(&self, widths: &[u16]) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, (column, &width)) in self.view.columns().iter().zip(widths).enumerate() {
            if width == 0 {
                break;
            }
            if i > 0 {
                spans.push(Span::raw(" ".repeat(usize::from(COLUMN_SPACING))));
            }
            let label = header_label(column, self.view.state());
            let style = if self.focused_column == Some(i) {
                self.styles.header_focused
            } else {
                self.styles.header
            };
            spans.push(Span::styled(
                fit_cell(&label, width, column.alignment()),
                style,
            ));
        }
        Line::from(spans)
    }

    fn row_line(&self, cells: Vec<String>, widths: &[u16], style: Style) -> Line<'static> {
        let columns = self.view.columns();
        let text = join_cells(
            cells
                .iter()
                .zip(widths)
                .zip(columns)
                .take_while(|((_, width), _)| **width > 0)
                .map(|((cell, &width), column)| fit_cell(cell, width, column.alignment())),
        );
        Line::styled(text, style)
    }

    fn skeleton_line(&self, widths: &[u16]) -> Line<'static> {
        let text = join_cells(
            widths
                .iter()
                .take_while(|&&width| width > 0)
                .map(|&width| SKELETON_CELL.to_string().repeat(usize::from(width))),
        );
        Line::styled(text, self.styles.skeleton)
    }

    fn message_lines(&self, message: String) -> Vec<Line<'static>> {
        vec![
            Line::default(),
            Line::styled(message, self.styles.muted).alignment(Alignment::Center),
        ]
    }
}

impl<R: Record> Widget for TableWidget<'_, R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.styles.border);
        if let Some(title) = self.title {
            block = block.title(format!(" {} ", title));
        }
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        let cells = page_cells(self.view);
        let widths = if self.view.columns().is_empty() {
            // Columns may only be known once loading finishes.
            if !self.view.is_loading() {
                Paragraph::new(self.message_lines("No columns to display".to_string()))
                    .render(inner, buf);
                return;
            }
            vec![inner.width]
        } else {
            fit_widths(&column_widths(self.view, &cells), inner.width)
        };

        let mut lines = vec![self.header_line(&widths)];
        match self.view.body() {
            TableBody::Loading { skeleton_rows } => {
                lines.extend((0..skeleton_rows).map(|_| self.skeleton_line(&widths)));
            }
            TableBody::NoResults { term } => {
                lines.extend(self.message_lines(format!("No results for \"{}\"", term.trim())));
            }
            TableBody::Empty => {
                lines.extend(self.message_lines("No data".to_string()));
            }
            TableBody::Rows(rows) => {
                for (i, (row, row_cells)) in rows.into_iter().zip(cells).enumerate() {
                    let mut style = self
                        .view
                        .row_class_of(row)
                        .map(|class| self.styles.row_class_style(&class))
                        .unwrap_or_default();
                    if self.selected_row == Some(i) {
                        style = style.patch(self.styles.selected_row);
                    }
                    lines.push(self.row_line(row_cells, &widths, style));
                }
            }
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
