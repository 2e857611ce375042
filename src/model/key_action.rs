//! Domain-level keyboard actions independent of key bindings.

/// Actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Search
    /// Focus the search input. Default: / or Ctrl+f
    StartSearch,
    /// Clear the search term and leave the input. Default: Esc
    ClearSearch,

    // Sorting
    /// Move the header cursor one column left. Default: h/←
    PrevColumn,
    /// Move the header cursor one column right. Default: l/→
    NextColumn,
    /// Click the header under the cursor. Default: s
    SortFocusedColumn,
    /// Click header N (1-based). Default: 1-9
    SortColumn(usize),

    // Rows
    /// Select the previous row on the page. Default: k/↑
    SelectPrevRow,
    /// Select the next row on the page. Default: j/↓
    SelectNextRow,
    /// Click the selected row. Default: Enter
    ActivateRow,

    // Pages
    /// Default: g/Home
    FirstPage,
    /// Default: p/PageUp
    PrevPage,
    /// Default: n/PageDown
    NextPage,
    /// Default: G/End
    LastPage,
    /// Cycle to the next larger page size. Default: +
    IncreasePageSize,
    /// Cycle to the next smaller page size. Default: -
    DecreasePageSize,

    // Application
    /// Toggle the help overlay. Default: ?
    Help,
    /// Exit. Default: q
    Quit,
}
