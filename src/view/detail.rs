//! Row detail overlay: every field of the activated row.

use super::constants::{DETAIL_POPUP_HEIGHT_PERCENT, DETAIL_POPUP_WIDTH_PERCENT};
use super::help::centered_rect;
use super::styles::TableStyles;
use crate::model::{Row, Value, EMPTY_CELL};
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Field/value pairs of one row, ready to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDetail {
    /// Overlay title, e.g. `Row 3 of 25`.
    pub title: String,
    /// Field name and display text, in display order.
    pub fields: Vec<(String, String)>,
}

impl RowDetail {
    /// Fields named in `order` come first, in that order; the rest follow
    /// alphabetically.
    pub fn from_row(title: impl Into<String>, row: &Row, order: &[String]) -> Self {
        let mut fields: Vec<(String, String)> = order
            .iter()
            .filter_map(|name| row.get(name).map(|value| (name, value)))
            .map(|(name, value)| (name.clone(), display(value)))
            .collect();

        let mut rest: Vec<(&str, &Value)> = row
            .iter()
            .filter(|(name, _)| !order.iter().any(|o| o == name))
            .collect();
        rest.sort_by(|a, b| a.0.cmp(b.0));
        fields.extend(
            rest.into_iter()
                .map(|(name, value)| (name.to_string(), display(value))),
        );

        Self {
            title: title.into(),
            fields,
        }
    }

    /// One aligned `name  value` line per field.
    pub fn lines(&self, styles: &TableStyles) -> Vec<Line<'static>> {
        if self.fields.is_empty() {
            return vec![Line::styled("No fields", styles.muted)];
        }
        let key_width = self
            .fields
            .iter()
            .map(|(name, _)| name.width())
            .max()
            .unwrap_or(0);
        self.fields
            .iter()
            .map(|(name, value)| {
                let pad = " ".repeat(key_width - name.width());
                Line::from(vec![
                    Span::styled(format!("{}{}  ", name, pad), styles.key),
                    Span::raw(value.clone()),
                ])
            })
            .collect()
    }
}

fn display(value: &Value) -> String {
    value
        .display_text()
        .unwrap_or_else(|| EMPTY_CELL.to_string())
}

/// Render the detail overlay centered on the screen.
pub fn render_detail_overlay(frame: &mut Frame, detail: &RowDetail, styles: &TableStyles) {
    let popup_area = centered_rect(
        DETAIL_POPUP_WIDTH_PERCENT,
        DETAIL_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );
    frame.render_widget(Clear, popup_area);

    let paragraph = Paragraph::new(detail.lines(styles))
        .block(
            Block::default()
                .title(format!(" {} ", detail.title))
                .title_bottom(Line::from(" Esc to close ").alignment(Alignment::Center))
                .borders(Borders::ALL)
                .border_style(styles.border),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, popup_area);
}
