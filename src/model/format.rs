//! Display formatting helpers for column values.

use super::value::Value;
use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

/// How a column turns a field value into cell text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnFormat {
    /// Display text as is.
    #[default]
    Plain,
    /// Symbol, thousands separators, two decimals.
    Currency,
    /// Number followed by `%`.
    Percent,
    /// RFC 3339 or `YYYY-MM-DD` text shown as a date.
    Date,
    /// Booleans as `Yes` / `No`.
    YesNo,
}

impl ColumnFormat {
    /// Cell text for `value`, or `None` for null. Values the format does not
    /// understand fall back to their plain display text.
    pub fn apply(self, value: &Value, currency_symbol: &str) -> Option<String> {
        let formatted = match self {
            ColumnFormat::Plain => None,
            ColumnFormat::Currency => value.as_number().map(|n| format_currency(n, currency_symbol)),
            ColumnFormat::Percent => value.as_number().map(format_percent),
            ColumnFormat::Date => match value {
                Value::Text(s) => format_date(s),
                _ => None,
            },
            ColumnFormat::YesNo => format_yes_no(value),
        };
        formatted.or_else(|| value.display_text())
    }
}

/// Format an amount with thousands separators and two decimals,
/// prefixed by `symbol`: `$1,234.50`, `-$3.00`.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative && cents > 0 { "-" } else { "" };
    format!("{sign}{symbol}{grouped}.{frac:02}")
}

/// Format a ratio already expressed in percent: `12.5` → `12.5%`.
pub fn format_percent(value: f64) -> String {
    format!("{}%", super::value::format_number((value * 100.0).round() / 100.0))
}

/// Reduce an RFC 3339 timestamp or `YYYY-MM-DD…` string to `YYYY-MM-DD`.
///
/// Returns `None` when the text is not a recognizable date.
pub fn format_date(text: &str) -> Option<String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive().format("%Y-%m-%d").to_string());
    }
    let prefix = text.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d")
        .ok()
        .map(|d| d.format("%Y-%m-%d").to_string())
}

/// `Yes`/`No` for booleans and their common encodings.
pub fn format_yes_no(value: &Value) -> Option<String> {
    let truthy = match value {
        Value::Bool(b) => *b,
        Value::Number(n) => *n != 0.0,
        Value::Text(s) => match s.to_lowercase().as_str() {
            "true" | "yes" | "1" => true,
            "false" | "no" | "0" => false,
            _ => return None,
        },
        _ => return None,
    };
    Some(if truthy { "Yes" } else { "No" }.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(1234.5, "$"), "$1,234.50");
        assert_eq!(format_currency(1_000_000.0, "$"), "$1,000,000.00");
    }

    #[test]
    fn currency_small_and_negative() {
        assert_eq!(format_currency(0.0, "$"), "$0.00");
        assert_eq!(format_currency(-3.0, "€"), "-€3.00");
        assert_eq!(format_currency(999.999, "$"), "$1,000.00");
    }

    #[test]
    fn percent_rounds_to_two_places() {
        assert_eq!(format_percent(12.5), "12.5%");
        assert_eq!(format_percent(33.3333), "33.33%");
        assert_eq!(format_percent(40.0), "40%");
    }

    #[test]
    fn date_from_rfc3339() {
        assert_eq!(
            format_date("2024-03-05T10:15:00Z").as_deref(),
            Some("2024-03-05")
        );
    }

    #[test]
    fn date_from_plain_prefix() {
        assert_eq!(format_date("2024-03-05").as_deref(), Some("2024-03-05"));
        assert_eq!(
            format_date("2024-03-05 10:15").as_deref(),
            Some("2024-03-05")
        );
    }

    #[test]
    fn date_rejects_garbage() {
        assert_eq!(format_date("yesterday"), None);
        assert_eq!(format_date("short"), None);
    }

    #[test]
    fn column_format_applies_or_falls_back() {
        let price = Value::Number(1234.5);
        assert_eq!(
            ColumnFormat::Currency.apply(&price, "$").as_deref(),
            Some("$1,234.50")
        );
        assert_eq!(ColumnFormat::Plain.apply(&price, "$").as_deref(), Some("1234.5"));
        assert_eq!(
            ColumnFormat::Date.apply(&Value::from("soon"), "$").as_deref(),
            Some("soon")
        );
        assert_eq!(ColumnFormat::Percent.apply(&Value::Null, "$"), None);
    }

    #[test]
    fn column_format_names_deserialize() {
        #[derive(Deserialize)]
        struct Doc {
            format: ColumnFormat,
        }
        let doc: Doc = toml::from_str("format = \"yes_no\"").unwrap();
        assert_eq!(doc.format, ColumnFormat::YesNo);
    }

    #[test]
    fn yes_no_variants() {
        assert_eq!(format_yes_no(&Value::Bool(true)).as_deref(), Some("Yes"));
        assert_eq!(format_yes_no(&Value::Number(0.0)).as_deref(), Some("No"));
        assert_eq!(format_yes_no(&Value::from("YES")).as_deref(), Some("Yes"));
        assert_eq!(format_yes_no(&Value::from("maybe")), None);
        assert_eq!(format_yes_no(&Value::Null), None);
    }
}
