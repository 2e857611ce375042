//! Domain model types (pure).
//!
//! Row values, the record accessor trait, column descriptors, and display
//! formatting. Nothing here performs I/O.

pub mod column;
pub mod error;
pub mod format;
pub mod key_action;
pub mod record;
pub mod value;

// Re-export for convenience
pub use column::{Align, ColumnSpec, EMPTY_CELL};
pub use error::{AppError, InputError};
pub use format::ColumnFormat;
pub use key_action::KeyAction;
pub use record::{Record, Row};
pub use value::Value;
