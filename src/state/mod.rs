//! Table state machine (pure).
//!
//! Filtering, sorting, pagination and the table's view state. Nothing here
//! touches the terminal; every transition is testable without a TUI.

pub mod compare;
pub mod filter;
pub mod paginate;
pub mod pagination;
pub mod search_input_handler;
pub mod sort;
pub mod table;
pub mod view_state;

pub use compare::{compare_values, SortDirection, SortKey};
pub use filter::{filter_indices, filter_rows, normalize_term};
pub use paginate::paginate;
pub use pagination::{InvalidPageSize, PageNav, PageSize, Pagination};
pub use search_input_handler::SearchState;
pub use sort::{sort_indices, sort_rows, SortSpec};
pub use table::{TableBody, TabularDataView, SKELETON_ROWS};
pub use view_state::ViewState;
