//! Decoding record documents.
//!
//! Two formats are accepted, told apart by the first non-whitespace byte:
//! a JSON array of objects (`[`) or JSON Lines, one object per line (`{`).

use crate::model::error::InputError;
use crate::model::Row;
use serde_json::{Map, Value as Json};

/// Decoded records plus the column order inferred from them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedRecords {
    /// Records in input order.
    pub rows: Vec<Row>,
    /// Keys of the first record, in document order.
    pub fields: Vec<String>,
}

impl LoadedRecords {
    fn from_objects(objects: Vec<Map<String, Json>>) -> Self {
        let fields = objects
            .first()
            .map(|first| first.keys().cloned().collect())
            .unwrap_or_default();
        let rows = objects.into_iter().map(Row::from).collect();
        Self { rows, fields }
    }
}

/// Parse a whole document.
///
/// Blank input is zero records, not an error.
///
/// # Errors
///
/// - `InvalidJson` for a malformed array document
/// - `InvalidLine` for a malformed JSON Lines record (1-based line number)
/// - `NotAnObject` for a record that is not an object (0-based index)
/// - `NotAnArray` for anything that is neither format
pub fn parse_records(text: &str) -> Result<LoadedRecords, InputError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    match text.trim_start().chars().next() {
        None => Ok(LoadedRecords::default()),
        Some('[') => parse_array(text),
        Some('{') => parse_lines(text),
        Some(_) => Err(InputError::NotAnArray),
    }
}

fn parse_array(text: &str) -> Result<LoadedRecords, InputError> {
    let document: Vec<Json> = serde_json::from_str(text).map_err(|e| InputError::InvalidJson {
        reason: e.to_string(),
    })?;

    let objects = document
        .into_iter()
        .enumerate()
        .map(|(index, value)| match value {
            Json::Object(map) => Ok(map),
            _ => Err(InputError::NotAnObject { index }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(LoadedRecords::from_objects(objects))
}

fn parse_lines(text: &str) -> Result<LoadedRecords, InputError> {
    let mut objects = Vec::new();
    for (line_index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let value: Json = serde_json::from_str(line).map_err(|e| InputError::InvalidLine {
            line: line_index + 1,
            reason: e.to_string(),
        })?;
        match value {
            Json::Object(map) => objects.push(map),
            _ => {
                return Err(InputError::NotAnObject {
                    index: objects.len(),
                })
            }
        }
    }
    Ok(LoadedRecords::from_objects(objects))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Record, Value};

    #[test]
    fn array_document_keeps_first_record_key_order() {
        let loaded =
            parse_records(r#"[{"name":"Apple","id":2,"price":1.5},{"id":1,"name":"Pear"}]"#)
                .unwrap();

        assert_eq!(loaded.rows.len(), 2);
        assert_eq!(loaded.fields, vec!["name", "id", "price"]);
        assert_eq!(loaded.rows[1].field("price"), Value::Null);
    }

    #[test]
    fn json_lines_skip_blank_lines() {
        let text = "{\"id\":1}\n\n  \n{\"id\":2}\n";
        let loaded = parse_records(text).unwrap();

        assert_eq!(loaded.rows.len(), 2);
        assert_eq!(loaded.rows[1].field("id"), Value::Number(2.0));
    }

    #[test]
    fn bad_json_line_reports_its_line_number() {
        let text = "{\"id\":1}\n\n{\"id\":\n";
        match parse_records(text) {
            Err(InputError::InvalidLine { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected InvalidLine, got {:?}", other),
        }
    }

    #[test]
    fn non_object_records_are_rejected_with_index() {
        assert!(matches!(
            parse_records(r#"[{"id":1}, 2]"#),
            Err(InputError::NotAnObject { index: 1 })
        ));
        assert!(matches!(
            parse_records("{\"id\":1}\n[1]\n"),
            Err(InputError::NotAnObject { index: 1 })
        ));
    }

    #[test]
    fn malformed_array_is_invalid_json() {
        assert!(matches!(
            parse_records("[{\"id\":1},"),
            Err(InputError::InvalidJson { .. })
        ));
    }

    #[test]
    fn other_documents_are_not_arrays() {
        assert!(matches!(parse_records("42"), Err(InputError::NotAnArray)));
        assert!(matches!(
            parse_records("\"text\""),
            Err(InputError::NotAnArray)
        ));
    }

    #[test]
    fn blank_input_is_zero_records() {
        assert_eq!(parse_records("  \n").unwrap(), LoadedRecords::default());
        assert_eq!(parse_records("[]").unwrap().fields, Vec::<String>::new());
    }

    #[test]
    fn nested_objects_become_opaque() {
        let loaded = parse_records(r#"[{"meta":{"a":1},"tags":["x",null]}]"#).unwrap();
        let row = &loaded.rows[0];

        assert!(matches!(row.field("meta"), Value::Opaque(_)));
        assert_eq!(row.field("tags").string_form(), "x,");
    }
}
