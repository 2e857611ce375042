//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod detail;
mod help;
pub mod layout;
mod pagination_bar;
pub mod print;
mod search_input;
mod styles;
mod table;

pub use detail::{render_detail_overlay, RowDetail};
pub use help::{centered_rect, render_help_overlay};
pub use pagination_bar::{nav_at, PaginationBar};
pub use print::render_page_text;
pub use search_input::SearchInput;
pub use styles::{ColorConfig, TableStyles};
pub use table::{fit_cell, header_label, TableWidget};

use crate::config::{build_columns, configure_table, KeyBindings, ResolvedConfig};
use crate::model::{InputError, KeyAction, Row};
use crate::source::{spawn_loader, InputSource, LoadedRecords};
use crate::state::search_input_handler::{
    activate_search_input, cancel_search, handle_backspace, handle_char_input,
    handle_cursor_left, handle_cursor_right, submit_search,
};
use crate::state::{PageNav, PageSize, SearchState, TabularDataView, ViewState};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use layout::{
    calculate_areas, column_widths, fit_widths, header_hit, page_cells, row_hit, table_inner,
    ScreenAreas,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    text::{Line, Span},
    widgets::Paragraph,
    Terminal,
};
use std::cell::RefCell;
use std::io::{self, Stdout};
use std::rc::Rc;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Event poll timeout; the loader channel is checked once per tick.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

type LoadResult = Result<LoadedRecords, InputError>;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Records could not be loaded
    #[error("Input error: {0}")]
    Input(#[from] InputError),
}

/// Interactive table viewer.
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    table: TabularDataView<Row>,
    config: ResolvedConfig,
    search: SearchState,
    key_bindings: KeyBindings,
    styles: TableStyles,
    title: String,
    /// Header cursor. Cleared when a row is selected.
    focused_column: Option<usize>,
    /// Selected row on the current page. Cleared when the header cursor moves.
    selected_row: Option<usize>,
    help_visible: bool,
    detail: Option<RowDetail>,
    /// Written by the table's row click handler, read after each click.
    clicked: Rc<RefCell<Option<Row>>>,
    loader: Option<Receiver<LoadResult>>,
    /// Geometry of the last frame, for mouse hit-testing.
    last_areas: Option<ScreenAreas>,
    last_widths: Vec<u16>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Set up the terminal (raw mode, alternate screen, mouse capture).
    pub fn new(
        config: ResolvedConfig,
        state: ViewState,
        title: impl Into<String>,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self::with_terminal(terminal, config, state, title))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits or loading fails.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse(mouse);
                        self.draw()?;
                    }
                    Event::Resize(_, _) => self.draw()?,
                    _ => {}
                }
            }

            if self.poll_loader()? {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// App over an existing terminal. No data until [`TuiApp::load`] or a
    /// loader delivers it.
    pub fn with_terminal(
        terminal: Terminal<B>,
        config: ResolvedConfig,
        state: ViewState,
        title: impl Into<String>,
    ) -> Self {
        let clicked = Rc::new(RefCell::new(None));
        let mut table = configure_table(&config, &[], state);
        if config.row_click {
            let sink = Rc::clone(&clicked);
            table = table.on_row_click(move |row: &Row| {
                *sink.borrow_mut() = Some(row.clone());
            });
        }

        let search = match table.state().search_term() {
            "" => SearchState::Inactive,
            term => SearchState::Active {
                query: term.to_string(),
            },
        };

        Self {
            terminal,
            styles: TableStyles::with_color_config(ColorConfig::new(config.color)),
            table,
            config,
            search,
            key_bindings: KeyBindings::default(),
            title: title.into(),
            focused_column: None,
            selected_row: None,
            help_visible: false,
            detail: None,
            clicked,
            loader: None,
            last_areas: None,
            last_widths: Vec::new(),
        }
    }

    /// Wait for records from `loader`; the table shows its loading state
    /// until they arrive.
    pub fn with_loader(mut self, loader: Receiver<LoadResult>) -> Self {
        self.loader = Some(loader);
        self.table.set_loading(true);
        self
    }

    /// Install loaded records: columns first (configured or inferred), then
    /// rows. Ends the loading state.
    pub fn load(&mut self, loaded: LoadedRecords) {
        info!(records = loaded.rows.len(), "Records ready");
        self.table
            .set_columns(build_columns(&self.config, &loaded.fields));
        self.table.set_data(loaded.rows);
        self.table.set_loading(false);
        self.focused_column = None;
        self.selected_row = None;
    }

    /// Check the loader channel. Returns true when records were installed.
    fn poll_loader(&mut self) -> Result<bool, TuiError> {
        let Some(loader) = &self.loader else {
            return Ok(false);
        };
        match loader.try_recv() {
            Ok(result) => {
                self.loader = None;
                self.load(result?);
                Ok(true)
            }
            Err(TryRecvError::Empty) => Ok(false),
            Err(TryRecvError::Disconnected) => {
                self.loader = None;
                Err(InputError::LoaderDisconnected.into())
            }
        }
    }

    // ===== Accessors =====

    /// The table being shown.
    pub fn table(&self) -> &TabularDataView<Row> {
        &self.table
    }

    /// Search box state.
    pub fn search(&self) -> &SearchState {
        &self.search
    }

    /// Column under the header cursor.
    pub fn focused_column(&self) -> Option<usize> {
        self.focused_column
    }

    /// Selected row index on the current page.
    pub fn selected_row(&self) -> Option<usize> {
        self.selected_row
    }

    /// Whether the help overlay is open.
    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    /// Open row detail, if any.
    pub fn detail(&self) -> Option<&RowDetail> {
        self.detail.as_ref()
    }

    /// Underlying terminal, for inspecting the drawn buffer.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    // ===== Keyboard =====

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.help_visible || self.detail.is_some() {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?')
            ) {
                self.help_visible = false;
                self.detail = None;
            }
            return false;
        }

        if self.search.is_typing() && self.handle_search_key(key) {
            return false;
        }

        match self.key_bindings.get(key) {
            Some(action) => self.dispatch(action),
            None => false,
        }
    }

    /// Keys consumed by the search input. Returns false to fall through to
    /// the bindings (page keys keep working while typing).
    fn handle_search_key(&mut self, key: KeyEvent) -> bool {
        let search = std::mem::take(&mut self.search);
        let (search, edited) = match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                (handle_char_input(search, ch), true)
            }
            KeyCode::Backspace => (handle_backspace(search), true),
            KeyCode::Left => (handle_cursor_left(search), false),
            KeyCode::Right => (handle_cursor_right(search), false),
            KeyCode::Enter => (submit_search(search), false),
            KeyCode::Esc => (cancel_search(search), true),
            _ => {
                self.search = search;
                return false;
            }
        };
        self.search = search;
        if edited {
            self.apply_search_term();
        }
        true
    }

    fn apply_search_term(&mut self) {
        let term = self.search.query().to_string();
        if term != self.table.state().search_term() {
            debug!(term = %term, "Search term changed");
            self.table.set_search_term(term);
            self.selected_row = None;
        }
    }

    fn dispatch(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.help_visible = true,
            KeyAction::StartSearch => {
                if self.table.is_searchable() {
                    self.search = activate_search_input(std::mem::take(&mut self.search));
                }
            }
            KeyAction::ClearSearch => {
                self.search = cancel_search(std::mem::take(&mut self.search));
                self.apply_search_term();
            }
            KeyAction::PrevColumn => self.move_column_cursor(false),
            KeyAction::NextColumn => self.move_column_cursor(true),
            KeyAction::SortFocusedColumn => {
                let column = self.focused_column.unwrap_or(0);
                self.sort_by(column);
            }
            KeyAction::SortColumn(n) => {
                if n >= 1 && n <= self.table.columns().len() {
                    self.focused_column = Some(n - 1);
                    self.sort_by(n - 1);
                }
            }
            KeyAction::SelectPrevRow => self.move_selection(false),
            KeyAction::SelectNextRow => self.move_selection(true),
            KeyAction::ActivateRow => match (self.selected_row, self.focused_column) {
                (Some(row), _) => self.click_row(row),
                (None, Some(column)) => self.sort_by(column),
                (None, None) => {}
            },
            KeyAction::FirstPage => self.navigate(PageNav::First),
            KeyAction::PrevPage => self.navigate(PageNav::Prev),
            KeyAction::NextPage => self.navigate(PageNav::Next),
            KeyAction::LastPage => self.navigate(PageNav::Last),
            KeyAction::IncreasePageSize => {
                let size = self.table.state().page_size().larger();
                self.set_page_size(size);
            }
            KeyAction::DecreasePageSize => {
                let size = self.table.state().page_size().smaller();
                self.set_page_size(size);
            }
        }
        false
    }

    fn move_column_cursor(&mut self, forward: bool) {
        let count = self.table.columns().len();
        if count == 0 {
            return;
        }
        self.focused_column = Some(match (self.focused_column, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(i), true) => (i + 1).min(count - 1),
            (Some(i), false) => i.saturating_sub(1),
        });
        self.selected_row = None;
    }

    /// Move the row cursor. Rows without a click handler are never selected.
    fn move_selection(&mut self, forward: bool) {
        if !self.table.rows_interactive() {
            return;
        }
        let rows = self.table.page_rows().len();
        if rows == 0 {
            self.selected_row = None;
            return;
        }
        self.selected_row = Some(match (self.selected_row, forward) {
            (None, true) => 0,
            (None, false) => rows - 1,
            (Some(i), true) => (i + 1).min(rows - 1),
            (Some(i), false) => i.saturating_sub(1),
        });
        self.focused_column = None;
    }

    fn sort_by(&mut self, column: usize) {
        if self.table.click_header(column) {
            debug!(column, sort = ?self.table.state().sort(), "Sort changed");
            self.selected_row = None;
        }
    }

    fn navigate(&mut self, nav: PageNav) {
        if self.table.navigate(nav) {
            self.selected_row = None;
        }
    }

    fn set_page_size(&mut self, size: PageSize) {
        if size != self.table.state().page_size() {
            self.table.set_page_size(size);
            self.selected_row = None;
        }
    }

    /// Click row `index` of the page and open its details.
    fn click_row(&mut self, index: usize) {
        if !self.table.click_row(index) {
            return;
        }
        let clicked = self.clicked.borrow_mut().take();
        if let Some(row) = clicked {
            let position = self.table.pagination().start_item() + index;
            let title = format!("Row {} of {}", position, self.table.total());
            let order: Vec<String> = self
                .table
                .columns()
                .iter()
                .filter_map(|c| c.source_field())
                .map(str::to_string)
                .collect();
            self.detail = Some(RowDetail::from_row(title, &row, &order));
        }
    }

    // ===== Mouse =====

    /// Left click sorts a header, clicks a row, or pages; the wheel moves
    /// the row selection.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.help_visible || self.detail.is_some() {
            if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                self.help_visible = false;
                self.detail = None;
            }
            return;
        }
        let Some(areas) = self.last_areas else {
            return;
        };
        let (x, y) = (mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(column) = header_hit(areas.table, &self.last_widths, x, y) {
                    self.focused_column = Some(column);
                    self.sort_by(column);
                } else if let Some(row) =
                    row_hit(areas.table, self.table.page_rows().len(), x, y)
                {
                    if self.table.rows_interactive() {
                        self.selected_row = Some(row);
                        self.focused_column = None;
                        self.click_row(row);
                    }
                } else if y == areas.pagination.y {
                    if let Some(nav) = nav_at(areas.pagination, &self.table.pagination(), x) {
                        self.navigate(nav);
                    }
                }
            }
            MouseEventKind::ScrollDown => self.move_selection(true),
            MouseEventKind::ScrollUp => self.move_selection(false),
            _ => {}
        }
    }

    // ===== Rendering =====

    fn status_line(&self) -> Line<'static> {
        let summary = if self.table.is_loading() {
            format!(" Loading {}...", self.title)
        } else {
            format!(" {} · {} rows", self.title, self.table.data().len())
        };
        Line::from(vec![
            Span::styled(summary, self.styles.key),
            Span::styled(
                "  / search  h/l column  s sort  n/p page  ? help  q quit",
                self.styles.muted,
            ),
        ])
    }

    /// Render one frame and remember its geometry for hit-testing.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let frame_area = ratatui::layout::Rect::new(0, 0, size.width, size.height);
        let areas = calculate_areas(frame_area, self.table.is_searchable());
        let cells = page_cells(&self.table);
        self.last_widths = fit_widths(
            &column_widths(&self.table, &cells),
            table_inner(areas.table).width,
        );
        self.last_areas = Some(areas);

        let status = self.status_line();
        let table = &self.table;
        let styles = &self.styles;
        let search = &self.search;
        let title = self.title.as_str();
        let focused_column = self.focused_column;
        let selected_row = self.selected_row;
        let help_visible = self.help_visible;
        let detail = self.detail.as_ref();

        self.terminal.draw(|frame| {
            if let Some(search_area) = areas.search {
                frame.render_widget(
                    SearchInput::new(search, table.placeholder(), styles),
                    search_area,
                );
            }
            frame.render_widget(
                TableWidget::new(table, styles)
                    .title(title)
                    .focused_column(focused_column)
                    .selected_row(selected_row),
                areas.table,
            );
            frame.render_widget(PaginationBar::new(table.pagination(), styles), areas.pagination);
            frame.render_widget(Paragraph::new(status), areas.status);

            if let Some(detail) = detail {
                render_detail_overlay(frame, detail, styles);
            }
            if help_visible {
                render_help_overlay(frame, styles);
            }
        })?;
        Ok(())
    }
}

/// Initialize and run the TUI over `source`.
///
/// Loading starts on a background thread right away. The terminal is
/// restored before any error is returned.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_source(
    source: InputSource,
    config: ResolvedConfig,
    state: ViewState,
) -> Result<(), TuiError> {
    let title = source.display_name();
    let loader = spawn_loader(source);
    let result = TuiApp::new(config, state, title).and_then(|app| {
        let mut app = app.with_loader(loader);
        app.run()
    });
    restore_terminal()?;
    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
