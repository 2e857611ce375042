//! Search input widget for rendering the search box above the table.

use super::styles::TableStyles;
use crate::state::SearchState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search box. Always drawn for searchable tables; shows the placeholder
/// when no term is set.
pub struct SearchInput<'a> {
    search_state: &'a SearchState,
    placeholder: &'a str,
    styles: &'a TableStyles,
}

impl<'a> SearchInput<'a> {
    /// Input showing `search_state`, or `placeholder` when empty.
    pub fn new(search_state: &'a SearchState, placeholder: &'a str, styles: &'a TableStyles) -> Self {
        Self {
            search_state,
            placeholder,
            styles,
        }
    }

    fn typing_line(query: &str, cursor: usize, styles: &TableStyles) -> Line<'static> {
        let before: String = query.chars().take(cursor).collect();
        let mut rest = query.chars().skip(cursor);
        let cursor_char = rest.next().map(String::from).unwrap_or_else(|| " ".to_string());
        let after: String = rest.collect();

        Line::from(vec![
            Span::raw(before),
            Span::styled(cursor_char, styles.key.add_modifier(Modifier::REVERSED)),
            Span::raw(after),
        ])
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (title, line) = match self.search_state {
            SearchState::Typing { query, cursor } => (
                " Search ",
                Self::typing_line(query, *cursor, self.styles),
            ),
            SearchState::Active { query } => (
                " Search (/ edit, Esc clear) ",
                Line::from(query.clone()),
            ),
            SearchState::Inactive => (
                " Search (/) ",
                Line::styled(self.placeholder.to_string(), self.styles.muted),
            ),
        };

        let border_style = if self.search_state.is_typing() {
            self.styles.key
        } else {
            self.styles.border
        };

        Paragraph::new(line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(title),
            )
            .render(area, buf);
    }
}
