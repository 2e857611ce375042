//! Field comparison primitive shared by the sort stage.
//!
//! Ordering rules, ascending:
//! 1. null == null
//! 2. null < anything defined
//! 3. number vs number compares numerically (`f64::total_cmp`, NaN last)
//! 4. everything else compares the lowercased string forms
//!
//! Mixed-type pairs (a number and a string) fall under rule 4. Numeric-looking
//! strings are not coerced. Rule 3 and rule 4 together are not transitive
//! across a mixed column, so the sort stage turns every number in such a
//! column into a text key before sorting (see `sort_indices`).

use crate::model::value::{format_number, Value};
use std::cmp::Ordering;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Smallest first; nulls lead.
    #[default]
    Ascending,
    /// Largest first; nulls trail.
    Descending,
}

impl SortDirection {
    /// Flip an ascending ordering for this direction.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// The other direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// A value reduced to what the comparator needs, extracted once per row.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    /// Null or missing field.
    Null,
    /// Numeric value.
    Number(f64),
    /// Lowercased string form.
    Text(String),
}

impl SortKey {
    /// Ascending comparison of two keys.
    pub fn cmp_ascending(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Null, SortKey::Null) => Ordering::Equal,
            (SortKey::Null, _) => Ordering::Less,
            (_, SortKey::Null) => Ordering::Greater,
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Number(a), SortKey::Text(b)) => number_text(*a).cmp(b),
            (SortKey::Text(a), SortKey::Number(b)) => a.as_str().cmp(number_text(*b).as_str()),
        }
    }

    /// Text key for a number, as rule 4 sees it.
    pub fn number_as_text(n: f64) -> Self {
        SortKey::Text(number_text(n))
    }
}

fn number_text(n: f64) -> String {
    format_number(n).to_lowercase()
}

impl From<&Value> for SortKey {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => SortKey::Null,
            Value::Number(n) => SortKey::Number(*n),
            other => SortKey::Text(other.string_form().to_lowercase()),
        }
    }
}

/// Compare two field values for the given direction.
pub fn compare_values(a: &Value, b: &Value, direction: SortDirection) -> Ordering {
    direction.apply(SortKey::from(a).cmp_ascending(&SortKey::from(b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ASC: SortDirection = SortDirection::Ascending;
    const DESC: SortDirection = SortDirection::Descending;

    #[test]
    fn nulls_are_equal() {
        assert_eq!(compare_values(&Value::Null, &Value::Null, ASC), Ordering::Equal);
        assert_eq!(compare_values(&Value::Null, &Value::Null, DESC), Ordering::Equal);
    }

    #[test]
    fn null_sorts_first_ascending_last_descending() {
        let five = Value::Number(5.0);
        assert_eq!(compare_values(&Value::Null, &five, ASC), Ordering::Less);
        assert_eq!(compare_values(&Value::Null, &five, DESC), Ordering::Greater);
        assert_eq!(compare_values(&five, &Value::Null, ASC), Ordering::Greater);
    }

    #[test]
    fn numbers_compare_numerically_not_lexically() {
        let two = Value::Number(2.0);
        let ten = Value::Number(10.0);
        assert_eq!(compare_values(&two, &ten, ASC), Ordering::Less);
        assert_eq!(compare_values(&two, &ten, DESC), Ordering::Greater);
    }

    #[test]
    fn strings_compare_case_insensitively() {
        let a = Value::from("apple");
        let b = Value::from("Banana");
        assert_eq!(compare_values(&a, &b, ASC), Ordering::Less);
        assert_eq!(
            compare_values(&Value::from("ABC"), &Value::from("abc"), ASC),
            Ordering::Equal
        );
    }

    #[test]
    fn mixed_types_fall_back_to_string_comparison() {
        // "10" < "9" as strings
        let ten = Value::Number(10.0);
        let nine = Value::from("9");
        assert_eq!(compare_values(&ten, &nine, ASC), Ordering::Less);
        assert_eq!(compare_values(&nine, &ten, ASC), Ordering::Greater);
    }

    #[test]
    fn booleans_compare_as_strings() {
        assert_eq!(
            compare_values(&Value::Bool(false), &Value::Bool(true), ASC),
            Ordering::Less
        );
    }

    #[test]
    fn nan_orders_after_every_number() {
        let nan = Value::Number(f64::NAN);
        let big = Value::Number(f64::MAX);
        assert_eq!(compare_values(&big, &nan, ASC), Ordering::Less);
        assert_eq!(compare_values(&nan, &nan, ASC), Ordering::Equal);
    }

    #[test]
    fn toggled_direction_round_trips() {
        assert_eq!(ASC.toggled(), DESC);
        assert_eq!(DESC.toggled(), ASC);
    }
}
