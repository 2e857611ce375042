//! Table styling.
//!
//! Colors can be switched off entirely (`--no-color`, `NO_COLOR`, or
//! `color = false`); selection and focus then fall back to modifiers so the
//! table stays usable on a monochrome terminal.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Whether colors are enabled. Resolved by the config layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Colors on or off.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::new(true)
    }
}

// ===== TableStyles =====

/// Styles for every part of the table screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStyles {
    colors: ColorConfig,
    /// Header cells.
    pub header: Style,
    /// Header cell under the column cursor.
    pub header_focused: Style,
    /// Selected row.
    pub selected_row: Style,
    /// Loading placeholder bars.
    pub skeleton: Style,
    /// Empty/no-results messages, placeholders, hints.
    pub muted: Style,
    /// Table and overlay borders.
    pub border: Style,
    /// Section titles in the help overlay.
    pub section_header: Style,
    /// Key names in the help overlay and status line.
    pub key: Style,
}

impl TableStyles {
    /// Styles for the given color setting.
    pub fn with_color_config(colors: ColorConfig) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        if colors.colors_enabled() {
            Self {
                colors,
                header: bold.fg(Color::Cyan),
                header_focused: bold.fg(Color::Black).bg(Color::Cyan),
                selected_row: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
                skeleton: Style::default().fg(Color::DarkGray),
                muted: Style::default().fg(Color::DarkGray),
                border: Style::default().fg(Color::Gray),
                section_header: bold.fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
                key: bold.fg(Color::Yellow),
            }
        } else {
            Self {
                colors,
                header: bold,
                header_focused: bold.add_modifier(Modifier::REVERSED),
                selected_row: Style::default().add_modifier(Modifier::REVERSED),
                skeleton: Style::default().add_modifier(Modifier::DIM),
                muted: Style::default().add_modifier(Modifier::DIM),
                border: Style::default(),
                section_header: bold.add_modifier(Modifier::UNDERLINED),
                key: bold,
            }
        }
    }

    /// Style for a row class name. Unknown classes are unstyled.
    pub fn row_class_style(&self, class: &str) -> Style {
        if !self.colors.colors_enabled() {
            return match class {
                "muted" => Style::default().add_modifier(Modifier::DIM),
                _ => Style::default(),
            };
        }
        match class {
            "muted" => Style::default().fg(Color::DarkGray),
            "warning" => Style::default().fg(Color::Yellow),
            "danger" => Style::default().fg(Color::Red),
            "success" => Style::default().fg(Color::Green),
            _ => Style::default(),
        }
    }
}

impl Default for TableStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::default())
    }
}

// ===== Tests =====
