//! Row records.
//!
//! The table core never reflects over row types. Callers implement
//! [`Record`] to expose named fields; [`Row`] is the dynamic map used for
//! records loaded from JSON.

use super::value::Value;
use std::collections::HashMap;

/// Typed field access for a table row.
///
/// Missing fields must return `Value::Null`.
pub trait Record {
    /// Value of the named field.
    fn field(&self, name: &str) -> Value;
}

/// A dynamic row: field name to value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    fields: HashMap<String, Value>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a field.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Borrow a field value if present.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Number of fields present.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the row has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over fields in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Record for Row {
    fn field(&self, name: &str) -> Value {
        self.fields.get(name).cloned().unwrap_or(Value::Null)
    }
}

impl<R: Record> Record for &R {
    fn field(&self, name: &str) -> Value {
        (*self).field(name)
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for Row {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        map.into_iter().map(|(k, v)| (k, Value::from(v))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_is_null() {
        let row = Row::new().with("name", "Apple");
        assert_eq!(row.field("price"), Value::Null);
    }

    #[test]
    fn present_field_is_returned() {
        let row = Row::new().with("id", 3i64);
        assert_eq!(row.field("id"), Value::Number(3.0));
    }

    #[test]
    fn converts_from_json_object() {
        let json = serde_json::json!({"name": "Banana", "stock": 4});
        let serde_json::Value::Object(map) = json else {
            panic!("expected object");
        };
        let row = Row::from(map);
        assert_eq!(row.len(), 2);
        assert_eq!(row.field("name"), Value::from("Banana"));
    }
}
