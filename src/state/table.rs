//! Tabular data view: filter → sort → paginate orchestration.
//!
//! `TabularDataView` holds the caller's rows and columns plus the table's own
//! `ViewState`, and derives what to show. Each mutation re-derives eagerly,
//! but every stage is memoized on its inputs: the filter reruns only when the
//! data, term, or searchable fields change; the sort reruns only when the
//! filtered set or the sort changes. Paginating is a slice of the sorted
//! indices.
//!
//! The view never mutates its input rows and performs no I/O.

use super::filter::{filter_indices, normalize_term};
use super::pagination::{PageNav, PageSize, Pagination};
use super::sort::{sort_indices, SortSpec};
use super::view_state::ViewState;
use crate::model::{ColumnSpec, Record};
use std::fmt;

/// Number of placeholder rows shown while loading.
pub const SKELETON_ROWS: usize = 6;

type RowClassFn<R> = Box<dyn Fn(&R) -> Option<String>>;
type RowClickFn<R> = Box<dyn FnMut(&R)>;

/// What the table body shows. Variants are listed in priority order.
#[derive(Debug, PartialEq)]
pub enum TableBody<'a, R> {
    /// Data is still loading; render placeholder rows.
    Loading {
        /// Placeholder row count.
        skeleton_rows: usize,
    },
    /// A search term is active and nothing matched.
    NoResults {
        /// The term as typed.
        term: &'a str,
    },
    /// There is nothing to show.
    Empty,
    /// Rows of the current page.
    Rows(Vec<&'a R>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FilterInputs {
    data_generation: u64,
    needle: Option<String>,
    fields: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SortInputs {
    filter_generation: u64,
    sort: Option<SortSpec>,
}

#[derive(Debug, Default)]
struct Derived {
    filter_inputs: Option<FilterInputs>,
    filter_generation: u64,
    filtered: Vec<usize>,
    sort_inputs: Option<SortInputs>,
    sorted: Vec<usize>,
    filter_passes: usize,
    sort_passes: usize,
}

/// A searchable, sortable, paginated view over a list of records.
pub struct TabularDataView<R> {
    data: Vec<R>,
    data_generation: u64,
    columns: Vec<ColumnSpec<R>>,
    state: ViewState,
    is_loading: bool,
    searchable: bool,
    search_placeholder: String,
    search_fields: Option<Vec<String>>,
    row_class: Option<RowClassFn<R>>,
    on_row_click: Option<RowClickFn<R>>,
    derived: Derived,
}

impl<R: Record> TabularDataView<R> {
    /// Empty, searchable table over `columns`.
    pub fn new(columns: Vec<ColumnSpec<R>>) -> Self {
        let mut view = Self {
            data: Vec::new(),
            data_generation: 0,
            columns,
            state: ViewState::default(),
            is_loading: false,
            searchable: true,
            search_placeholder: "Search...".to_string(),
            search_fields: None,
            row_class: None,
            on_row_click: None,
            derived: Derived::default(),
        };
        view.recompute();
        view
    }

    // ===== Builder =====

    /// Initial rows.
    pub fn with_data(mut self, data: Vec<R>) -> Self {
        self.set_data(data);
        self
    }

    /// Start from an existing view state, e.g. one restored from flags.
    /// The term is dropped when the table is not searchable.
    pub fn with_state(mut self, state: ViewState) -> Self {
        self.state = state;
        if !self.searchable && !self.state.search_term().is_empty() {
            self.state.set_search_term("");
        }
        self.recompute();
        self
    }

    /// Start in the loading state.
    pub fn loading(mut self, is_loading: bool) -> Self {
        self.set_loading(is_loading);
        self
    }

    /// Whether the search input is offered. A non-searchable table ignores
    /// search terms.
    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        if !searchable {
            self.state.set_search_term("");
        }
        self.recompute();
        self
    }

    /// Placeholder for the empty search input.
    pub fn search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = placeholder.into();
        self
    }

    /// Restrict search to these fields instead of every column field.
    pub fn search_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_fields = Some(fields.into_iter().map(Into::into).collect());
        self.recompute();
        self
    }

    /// Per-row class name, mapped to a style by the renderer.
    pub fn row_class(mut self, f: impl Fn(&R) -> Option<String> + 'static) -> Self {
        self.row_class = Some(Box::new(f));
        self
    }

    /// Row click handler. Rows are interactive only when one is set.
    pub fn on_row_click(mut self, f: impl FnMut(&R) + 'static) -> Self {
        self.on_row_click = Some(Box::new(f));
        self
    }

    // ===== Inputs =====

    /// Replace the rows. Re-derives the view.
    pub fn set_data(&mut self, data: Vec<R>) {
        self.data = data;
        self.data_generation += 1;
        self.recompute();
    }

    /// Replace the columns. Search fields default to the new column fields.
    pub fn set_columns(&mut self, columns: Vec<ColumnSpec<R>>) {
        self.columns = columns;
        self.recompute();
    }

    /// Toggle the loading state. The page clamp waits until loading ends.
    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
        self.recompute();
    }

    /// Input rows, unfiltered and in input order.
    pub fn data(&self) -> &[R] {
        &self.data
    }

    /// Column specs, in display order.
    pub fn columns(&self) -> &[ColumnSpec<R>] {
        &self.columns
    }

    /// Current view state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Whether the table is waiting for data.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Whether search terms apply.
    pub fn is_searchable(&self) -> bool {
        self.searchable
    }

    /// Search input placeholder.
    pub fn placeholder(&self) -> &str {
        &self.search_placeholder
    }

    /// Fields the filter searches: the explicit list, else every column
    /// that has a source field.
    pub fn effective_search_fields(&self) -> Vec<String> {
        match &self.search_fields {
            Some(fields) => fields.clone(),
            None => self
                .columns
                .iter()
                .filter_map(|c| c.source_field())
                .map(str::to_string)
                .collect(),
        }
    }

    // ===== Interaction =====

    /// Replace the search term (ignored when not searchable).
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        if !self.searchable {
            return;
        }
        self.state.set_search_term(term);
        self.recompute();
    }

    /// Header click. Returns true when the sort changed; display-only and
    /// non-sortable columns ignore clicks.
    pub fn click_header(&mut self, column: usize) -> bool {
        let Some(field) = self
            .columns
            .get(column)
            .filter(|c| c.is_sortable())
            .and_then(|c| c.source_field())
            .map(str::to_string)
        else {
            return false;
        };
        self.state.toggle_sort(&field);
        self.recompute();
        true
    }

    /// Change rows per page. Resets to page 1.
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.state.set_page_size(page_size);
        self.recompute();
    }

    /// Apply a pagination request. Returns true when the page changed.
    pub fn navigate(&mut self, nav: PageNav) -> bool {
        let total = self.total();
        let changed = self.state.navigate(nav, total);
        if changed {
            self.recompute();
        }
        changed
    }

    /// Whether rows respond to clicks.
    pub fn rows_interactive(&self) -> bool {
        self.on_row_click.is_some()
    }

    /// Click row `index` of the current page. Returns true when a handler
    /// ran.
    pub fn click_row(&mut self, index: usize) -> bool {
        let Some(data_index) = self.page_indices().get(index).copied() else {
            return false;
        };
        match self.on_row_click.as_mut() {
            Some(handler) => {
                handler(&self.data[data_index]);
                true
            }
            None => false,
        }
    }

    // ===== Derived views =====

    /// Number of rows after filtering.
    pub fn total(&self) -> usize {
        self.derived.filtered.len()
    }

    /// Pagination numbers for the current state.
    pub fn pagination(&self) -> Pagination {
        self.state.pagination(self.total())
    }

    /// Filtered and sorted rows, all pages.
    pub fn sorted_rows(&self) -> Vec<&R> {
        self.derived.sorted.iter().map(|&i| &self.data[i]).collect()
    }

    /// Rows on the current page.
    pub fn page_rows(&self) -> Vec<&R> {
        self.page_indices()
            .iter()
            .map(|&i| &self.data[i])
            .collect()
    }

    /// Body to render, in priority order: loading, no results, empty, rows.
    ///
    /// An empty page with any search term typed, blank or not, is
    /// `NoResults`; `Empty` means no term at all.
    pub fn body(&self) -> TableBody<'_, R> {
        if self.is_loading {
            return TableBody::Loading {
                skeleton_rows: SKELETON_ROWS,
            };
        }
        let rows = self.page_rows();
        if rows.is_empty() {
            if !self.state.search_term().is_empty() {
                TableBody::NoResults {
                    term: self.state.search_term(),
                }
            } else {
                TableBody::Empty
            }
        } else {
            TableBody::Rows(rows)
        }
    }

    /// Class name for a row, if a classifier is set.
    pub fn row_class_of(&self, row: &R) -> Option<String> {
        self.row_class.as_ref().and_then(|f| f(row))
    }

    /// Cell texts of a row, one per column.
    pub fn cells(&self, row: &R) -> Vec<String> {
        self.columns.iter().map(|c| c.cell_text(row)).collect()
    }

    fn page_indices(&self) -> &[usize] {
        let page_size = self.state.page_size().get();
        super::paginate::paginate(&self.derived.sorted, self.state.current_page(), page_size)
    }

    /// Re-derive stale stages and clamp the page.
    fn recompute(&mut self) {
        let filter_inputs = FilterInputs {
            data_generation: self.data_generation,
            needle: normalize_term(self.state.search_term()),
            fields: self.effective_search_fields(),
        };
        if self.derived.filter_inputs.as_ref() != Some(&filter_inputs) {
            self.derived.filtered =
                filter_indices(&self.data, self.state.search_term(), &filter_inputs.fields);
            self.derived.filter_inputs = Some(filter_inputs);
            self.derived.filter_generation += 1;
            self.derived.filter_passes += 1;
        }

        let sort_inputs = SortInputs {
            filter_generation: self.derived.filter_generation,
            sort: self.state.sort().cloned(),
        };
        if self.derived.sort_inputs.as_ref() != Some(&sort_inputs) {
            let filtered = self.derived.filtered.clone();
            self.derived.sorted = match &sort_inputs.sort {
                Some(spec) => sort_indices(&self.data, filtered, &spec.key, spec.direction),
                None => filtered,
            };
            self.derived.sort_inputs = Some(sort_inputs);
            self.derived.sort_passes += 1;
        }

        // Loading rows are not the real result yet; keep the requested page.
        if !self.is_loading {
            let total = self.derived.filtered.len();
            self.state.clamp_page(total);
        }
    }

    #[cfg(test)]
    fn passes(&self) -> (usize, usize) {
        (self.derived.filter_passes, self.derived.sort_passes)
    }
}

impl<R> fmt::Debug for TabularDataView<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabularDataView")
            .field("rows", &self.data.len())
            .field("columns", &self.columns)
            .field("state", &self.state)
            .field("is_loading", &self.is_loading)
            .field("searchable", &self.searchable)
            .field("search_fields", &self.search_fields)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
