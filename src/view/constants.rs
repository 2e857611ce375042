//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the search input widget in lines (border + content).
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Height of the pagination bar in lines.
pub const PAGINATION_BAR_HEIGHT: u16 = 1;

/// Height of the key hint line at the bottom of the screen.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Blank cells between adjacent table columns.
pub const COLUMN_SPACING: u16 = 1;

/// Upper bound for a column sized from its content.
pub const MAX_AUTO_COLUMN_WIDTH: u16 = 40;

/// Narrowest a content-sized column gets.
pub const MIN_COLUMN_WIDTH: u16 = 3;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Width percentage for the row detail popup.
pub const DETAIL_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for the row detail popup.
pub const DETAIL_POPUP_HEIGHT_PERCENT: u16 = 70;
