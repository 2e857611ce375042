//! Free-text filter stage.
//!
//! Case-insensitive substring containment over the searchable fields of each
//! row. The term is never interpreted as a pattern.

use crate::model::Record;

/// Normalize a raw search term: trimmed and lowercased.
///
/// Returns `None` when the trimmed term is empty (no filtering).
pub fn normalize_term(term: &str) -> Option<String> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Whether any searchable field of `row` contains `needle`.
///
/// `needle` must already be normalized. Null and opaque values never match.
pub fn row_matches<R: Record, S: AsRef<str>>(row: &R, needle: &str, fields: &[S]) -> bool {
    fields.iter().any(|field| {
        row.field(field.as_ref())
            .search_text()
            .is_some_and(|text| text.contains(needle))
    })
}

/// Indices of rows matching `term`, in input order.
///
/// An empty or whitespace-only term keeps every row.
pub fn filter_indices<R: Record, S: AsRef<str>>(rows: &[R], term: &str, fields: &[S]) -> Vec<usize> {
    let Some(needle) = normalize_term(term) else {
        return (0..rows.len()).collect();
    };

    rows.iter()
        .enumerate()
        .filter(|(_, row)| row_matches(*row, &needle, fields))
        .map(|(i, _)| i)
        .collect()
}

/// Rows matching `term`, in input order.
pub fn filter_rows<'a, R: Record, S: AsRef<str>>(
    rows: &'a [R],
    term: &str,
    fields: &[S],
) -> Vec<&'a R> {
    filter_indices(rows, term, fields)
        .into_iter()
        .map(|i| &rows[i])
        .collect()
}
