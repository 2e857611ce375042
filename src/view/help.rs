//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with the shortcuts grouped by category.
//! Triggered by '?', dismissed by 'Esc', 'Enter', 'q' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::TableStyles;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const HELP_GROUPS: &[(&str, &[(&str, &str)])] = &[
    (
        "Pages",
        &[
            ("n/PageDown", "Next page"),
            ("p/PageUp", "Previous page"),
            ("g/Home", "First page"),
            ("G/End", "Last page"),
            ("+/-", "More/fewer rows per page"),
        ],
    ),
    (
        "Columns & Sorting",
        &[
            ("h/← l/→", "Move column cursor"),
            ("s", "Sort by focused column"),
            ("1-9", "Sort by column number"),
            ("click header", "Sort by that column"),
        ],
    ),
    (
        "Rows",
        &[
            ("j/↓ k/↑", "Select row"),
            ("Enter/click", "Open row details"),
        ],
    ),
    (
        "Search",
        &[
            ("//Ctrl+f", "Edit search"),
            ("Enter", "Finish editing"),
            ("Esc", "Clear search"),
        ],
    ),
    ("Application", &[("?", "Toggle help"), ("q/Ctrl+c", "Quit")]),
];

const KEY_COLUMN_WIDTH: usize = 14;

/// Rect of `percent_x` by `percent_y` of `area`, centered in it.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

/// Help content lines grouped by category.
pub fn help_lines(styles: &TableStyles) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, (group, keys)) in HELP_GROUPS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(*group, styles.section_header)));
        for (key, description) in keys.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<width$}", key, width = KEY_COLUMN_WIDTH), styles.key),
                Span::raw(*description),
            ]));
        }
    }
    lines
}

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, styles: &TableStyles) {
    let popup_area = centered_rect(
        HELP_POPUP_WIDTH_PERCENT,
        HELP_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );
    frame.render_widget(Clear, popup_area);

    let help = Paragraph::new(help_lines(styles))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .title_bottom(Line::from(" Press Esc or ? to close ").alignment(Alignment::Center))
                .borders(Borders::ALL)
                .border_style(styles.border),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(help, popup_area);
}
