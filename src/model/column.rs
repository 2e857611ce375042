//! Column descriptors.

use super::record::Record;
use std::fmt;

/// Placeholder shown for null, missing, or field-less cells.
pub const EMPTY_CELL: &str = "—";

/// Horizontal alignment of a column's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Flush left.
    #[default]
    Left,
    /// Centered.
    Center,
    /// Flush right; the usual choice for numbers.
    Right,
}

type RenderFn<R> = Box<dyn Fn(&R) -> String>;

/// A column of the table: header label, optional source field, sortability,
/// and an optional display transform.
///
/// A column without a field is display-only: it is never sortable and never
/// searchable, whatever `sortable` was set to.
pub struct ColumnSpec<R> {
    header: String,
    field: Option<String>,
    sortable: bool,
    render: Option<RenderFn<R>>,
    align: Align,
    width: Option<u16>,
}

impl<R> ColumnSpec<R> {
    /// Display-only column with the given header.
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            field: None,
            sortable: true,
            render: None,
            align: Align::Left,
            width: None,
        }
    }

    /// Column bound to a field, sortable by default.
    pub fn field(header: impl Into<String>, field: impl Into<String>) -> Self {
        Self::new(header).with_field(field)
    }

    /// Bind the column to a source field. Empty names leave it display-only.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        let field = field.into();
        self.field = if field.is_empty() { None } else { Some(field) };
        self
    }

    /// Mark the column sortable or not.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Custom cell renderer. Its output is never searched or sorted on.
    pub fn render(mut self, render: impl Fn(&R) -> String + 'static) -> Self {
        self.render = Some(Box::new(render));
        self
    }

    /// Cell alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Fixed display width in terminal cells.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Header label.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Source field, if any.
    pub fn source_field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Whether clicking the header sorts. Always false without a field.
    pub fn is_sortable(&self) -> bool {
        self.sortable && self.field.is_some()
    }

    /// Cell alignment.
    pub fn alignment(&self) -> Align {
        self.align
    }

    /// Fixed width, if one was set.
    pub fn fixed_width(&self) -> Option<u16> {
        self.width
    }

    /// Whether a custom renderer replaces the field text.
    pub fn has_renderer(&self) -> bool {
        self.render.is_some()
    }
}

impl<R: Record> ColumnSpec<R> {
    /// Cell text for a row: renderer output, else the field's display text,
    /// else [`EMPTY_CELL`].
    pub fn cell_text(&self, row: &R) -> String {
        if let Some(render) = &self.render {
            return render(row);
        }
        self.field
            .as_deref()
            .and_then(|f| row.field(f).display_text())
            .unwrap_or_else(|| EMPTY_CELL.to_string())
    }
}

impl<R> fmt::Debug for ColumnSpec<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("header", &self.header)
            .field("field", &self.field)
            .field("sortable", &self.sortable)
            .field("render", &self.render.as_ref().map(|_| "<fn>"))
            .field("align", &self.align)
            .field("width", &self.width)
            .finish()
    }
}
