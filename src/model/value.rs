//! Field values held by table rows.
//!
//! `Value` is a small closed union. Scalars and lists take part in search and
//! sort through their string form; `Opaque` values (nested objects, rendered
//! content) are displayed but never searched.

use std::fmt;

/// A single field value of a row.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Missing or explicit null.
    #[default]
    Null,
    /// Boolean flag.
    Bool(bool),
    /// Any numeric value.
    Number(f64),
    /// Plain text.
    Text(String),
    /// Array of values. Searched through its comma-joined string form.
    List(Vec<Value>),
    /// Display-only content (e.g. a nested JSON object). Never searched.
    Opaque(String),
}

impl Value {
    /// True for `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The numeric payload, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// String form used for searching and string comparison.
    ///
    /// Numbers print without a trailing `.0` when integral, booleans as
    /// `true`/`false`, lists comma-joined with nulls as empty strings.
    pub fn string_form(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => format_number(*n),
            Value::Text(s) => s.clone(),
            Value::List(items) => items
                .iter()
                .map(Value::string_form)
                .collect::<Vec<_>>()
                .join(","),
            Value::Opaque(s) => s.clone(),
        }
    }

    /// Lowercased string form for search, or `None` when the value is not
    /// searchable (null or opaque).
    pub fn search_text(&self) -> Option<String> {
        match self {
            Value::Null | Value::Opaque(_) => None,
            other => Some(other.string_form().to_lowercase()),
        }
    }

    /// Display text for a table cell, or `None` for null.
    pub fn display_text(&self) -> Option<String> {
        match self {
            Value::Null => None,
            other => Some(other.string_form()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string_form())
    }
}

/// Format a number the way a JSON consumer prints it: `3`, `1.5`, `-0.25`.
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(f) => Value::Number(f),
                None => Value::Text(n.to_string()),
            },
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            obj @ serde_json::Value::Object(_) => Value::Opaque(obj.to_string()),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::Null)
    }
}
