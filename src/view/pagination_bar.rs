//! Pagination bar: item range, page controls, page size.
//!
//! ```text
//! 21-25 of 25            «  ‹  Page 3 of 3  ›  »       Rows per page: 10
//! ```
//!
//! The line is laid out by hand so [`nav_at`] can hit-test the controls
//! against exactly what was drawn.

use super::styles::TableStyles;
use crate::state::{PageNav, Pagination};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

const GAP: &str = "  ";

/// Item range text: `start-end of total`, or `No items`.
pub fn range_text(pagination: &Pagination) -> String {
    if pagination.total == 0 {
        "No items".to_string()
    } else {
        format!(
            "{}-{} of {}",
            pagination.start_item(),
            pagination.end_item(),
            pagination.total
        )
    }
}

/// `Page x of y`; an empty table still reads `Page 1 of 1`.
pub fn page_text(pagination: &Pagination) -> String {
    format!(
        "Page {} of {}",
        pagination.current_page,
        pagination.total_pages().max(1)
    )
}

fn size_text(pagination: &Pagination) -> String {
    format!("Rows per page: {}", pagination.page_size)
}

/// The centered controls, each with the request it makes.
fn controls(pagination: &Pagination) -> [(String, Option<PageNav>); 5] {
    [
        ("«".to_string(), Some(PageNav::First)),
        ("‹".to_string(), Some(PageNav::Prev)),
        (page_text(pagination), None),
        ("›".to_string(), Some(PageNav::Next)),
        ("»".to_string(), Some(PageNav::Last)),
    ]
}

fn text_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

fn controls_width(pagination: &Pagination) -> u16 {
    let parts = controls(pagination);
    parts
        .iter()
        .map(|(text, _)| text_width(text))
        .fold(0u16, u16::saturating_add)
        .saturating_add(text_width(GAP) * (parts.len() as u16 - 1))
}

/// Offset of the controls from the left edge: centered, but never over the
/// range text.
fn controls_offset(width: u16, pagination: &Pagination) -> u16 {
    let centered = width.saturating_sub(controls_width(pagination)) / 2;
    centered.max(text_width(&range_text(pagination)).saturating_add(1))
}

/// Navigation request for a click at screen column `x`, if it hits an
/// enabled control.
pub fn nav_at(area: Rect, pagination: &Pagination, x: u16) -> Option<PageNav> {
    let mut start = area
        .x
        .saturating_add(controls_offset(area.width, pagination));
    for (text, nav) in controls(pagination) {
        let end = start.saturating_add(text_width(&text));
        if x >= start && x < end {
            return nav.filter(|&nav| pagination.target(nav).is_some());
        }
        start = end.saturating_add(text_width(GAP));
    }
    None
}

/// Pagination bar widget.
pub struct PaginationBar<'a> {
    pagination: Pagination,
    styles: &'a TableStyles,
}

impl<'a> PaginationBar<'a> {
    /// Bar for the given numbers.
    pub fn new(pagination: Pagination, styles: &'a TableStyles) -> Self {
        Self { pagination, styles }
    }

    fn control_style(&self, nav: Option<PageNav>) -> Style {
        match nav {
            Some(nav) if self.pagination.target(nav).is_none() => self.styles.muted,
            Some(_) => self.styles.key,
            None => Style::default(),
        }
    }
}

impl Widget for PaginationBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let range = range_text(&self.pagination);
        let size = size_text(&self.pagination);
        let offset = controls_offset(area.width, &self.pagination);
        let controls_end = offset.saturating_add(controls_width(&self.pagination));
        let size_start = area
            .width
            .saturating_sub(text_width(&size))
            .max(controls_end.saturating_add(1));

        let mut spans = vec![
            Span::raw(range.clone()),
            Span::raw(" ".repeat(usize::from(offset.saturating_sub(text_width(&range))))),
        ];
        for (i, (text, nav)) in controls(&self.pagination).into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(GAP));
            }
            let style = self.control_style(nav);
            spans.push(Span::styled(text, style));
        }
        spans.push(Span::raw(
            " ".repeat(usize::from(size_start.saturating_sub(controls_end))),
        ));
        spans.push(Span::styled(size, self.styles.muted));

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
