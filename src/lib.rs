//! tabview
//!
//! A reusable searchable, sortable, paginated data table, plus a terminal
//! viewer for JSON records built on it.
//!
//! Follows the Pure Core / Impure Shell split:
//! - [`model`] and [`state`] are pure: records, columns, and the
//!   filter → sort → paginate pipeline behind [`state::TabularDataView`]
//! - [`config`], [`logging`], [`source`] and [`view`] do the I/O

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
