//! Table view state and its transitions (pure).
//!
//! `ViewState` is the only state a table owns: the search term, the active
//! sort, the current page, and the page size. Every transition here keeps the
//! reset rules:
//! - a new search term puts the table back on page 1
//! - a new page size puts the table back on page 1
//! - clicking the active sort column flips direction, any other column
//!   becomes the ascending sort

use super::compare::SortDirection;
use super::pagination::{PageNav, PageSize, Pagination};
use super::sort::SortSpec;

/// Search term, sort, and page of one table.
///
/// Starts with no term, no sort, page 1 and ten rows per page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    search_term: String,
    sort: Option<SortSpec>,
    current_page: usize,
    page_size: PageSize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            sort: None,
            current_page: 1,
            page_size: PageSize::Ten,
        }
    }
}

impl ViewState {
    /// Initial state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw search term as typed.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Active sort, if any.
    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    /// Active sort field, if any.
    pub fn sort_key(&self) -> Option<&str> {
        self.sort.as_ref().map(|s| s.key.as_str())
    }

    /// Direction of the active sort, ascending when none is active.
    pub fn sort_direction(&self) -> SortDirection {
        self.sort
            .as_ref()
            .map(|s| s.direction)
            .unwrap_or_default()
    }

    /// 1-based current page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Rows per page.
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Replace the search term. Always resets to page 1.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    /// Header click on a sortable field.
    pub fn toggle_sort(&mut self, field: &str) {
        self.sort = Some(match self.sort.take() {
            Some(active) if active.key == field => SortSpec {
                key: active.key,
                direction: active.direction.toggled(),
            },
            _ => SortSpec::ascending(field),
        });
    }

    /// Set the sort directly (initial state from configuration).
    pub fn set_sort(&mut self, sort: Option<SortSpec>) {
        self.sort = sort;
    }

    /// Change page size. Always resets to page 1.
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.current_page = 1;
    }

    /// Set the current page without validation. Values below 1 become 1.
    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// Apply a navigation request against `total` items.
    ///
    /// Returns true when the page changed.
    pub fn navigate(&mut self, nav: PageNav, total: usize) -> bool {
        match self.pagination(total).target(nav) {
            Some(page) => {
                self.current_page = page;
                true
            }
            None => false,
        }
    }

    /// Reset to page 1 when the current page lies past the last page of
    /// `total` items. Returns true when a reset happened.
    pub fn clamp_page(&mut self, total: usize) -> bool {
        let total_pages = self.pagination(total).total_pages().max(1);
        if self.current_page > total_pages {
            self.current_page = 1;
            true
        } else {
            false
        }
    }

    /// Pagination view over `total` items.
    pub fn pagination(&self, total: usize) -> Pagination {
        Pagination::new(total, self.page_size, self.current_page)
    }
}

#[cfg(test)]
#[path = "view_state_tests.rs"]
mod tests;
