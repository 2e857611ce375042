//! Stable sort stage.
//!
//! Keys are extracted once per row, then ordered with a stable sort. The
//! direction flips each comparison instead of reversing the output, so rows
//! with equal keys keep their input order in both directions.
//!
//! A column compares numerically only when every defined key is a number.
//! One text key turns the whole column into text keys, which keeps the
//! comparator a total order on mixed columns.

use super::compare::{SortDirection, SortKey};
use crate::model::Record;

/// Active sort: a field and a direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortSpec {
    /// Field read from each record.
    pub key: String,
    /// Ascending or descending.
    pub direction: SortDirection,
}

impl SortSpec {
    /// Ascending sort on `key`.
    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Descending sort on `key`.
    pub fn descending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Reorder `indices` (positions into `rows`) by `key`.
pub fn sort_indices<R: Record>(
    rows: &[R],
    indices: Vec<usize>,
    key: &str,
    direction: SortDirection,
) -> Vec<usize> {
    let mut keyed: Vec<(SortKey, usize)> = indices
        .into_iter()
        .map(|i| (SortKey::from(&rows[i].field(key)), i))
        .collect();

    let mixed = keyed.iter().any(|(k, _)| matches!(k, SortKey::Text(_)));
    if mixed {
        for (k, _) in keyed.iter_mut() {
            if let SortKey::Number(n) = *k {
                *k = SortKey::number_as_text(n);
            }
        }
    }

    // Vec::sort_by is stable.
    keyed.sort_by(|(a, _), (b, _)| direction.apply(a.cmp_ascending(b)));

    keyed.into_iter().map(|(_, i)| i).collect()
}

/// Sorted view of `rows`. `None` keeps input order.
pub fn sort_rows<'a, R: Record>(rows: &'a [R], sort: Option<&SortSpec>) -> Vec<&'a R> {
    let indices: Vec<usize> = (0..rows.len()).collect();
    let indices = match sort {
        Some(spec) => sort_indices(rows, indices, &spec.key, spec.direction),
        None => indices,
    };
    indices.into_iter().map(|i| &rows[i]).collect()
}
