//! Building table columns and row classes from resolved configuration.

use super::loader::{ColumnConfig, ResolvedConfig, RowClassRule};
use crate::model::{ColumnFormat, ColumnSpec, Record, Row, EMPTY_CELL};
use crate::state::{TabularDataView, ViewState};

/// A table over `Row` data set up from configuration.
///
/// `fields` are the inferred field names used when no columns are
/// configured. The table starts out loading so the requested page survives
/// until rows arrive: call `set_data`, then `set_loading(false)`.
pub fn configure_table(
    config: &ResolvedConfig,
    fields: &[String],
    state: ViewState,
) -> TabularDataView<Row> {
    let mut table = TabularDataView::new(build_columns(config, fields))
        .loading(true)
        .searchable(config.searchable)
        .search_placeholder(config.search_placeholder.clone());
    if let Some(search_fields) = &config.search_fields {
        table = table.search_fields(search_fields.clone());
    }
    if let Some(classify) = row_classifier(&config.row_classes) {
        table = table.row_class(classify);
    }
    table.with_state(state)
}

/// Columns for `Row` data.
///
/// Configured columns win; otherwise one plain column per `inferred` field,
/// in the order given.
pub fn build_columns(config: &ResolvedConfig, inferred: &[String]) -> Vec<ColumnSpec<Row>> {
    if config.columns.is_empty() {
        inferred
            .iter()
            .map(|field| ColumnSpec::field(field.clone(), field.clone()))
            .collect()
    } else {
        config
            .columns
            .iter()
            .map(|column| column_spec(column, &config.currency_symbol))
            .collect()
    }
}

fn column_spec(column: &ColumnConfig, currency_symbol: &str) -> ColumnSpec<Row> {
    let mut spec = ColumnSpec::new(column.header.clone());
    if let Some(field) = &column.field {
        spec = spec.with_field(field.clone());
    }
    if let Some(sortable) = column.sortable {
        spec = spec.sortable(sortable);
    }
    if let Some(align) = column.align {
        spec = spec.align(align);
    }
    if let Some(width) = column.width {
        spec = spec.width(width);
    }

    let format = column.format.unwrap_or_default();
    match (&column.render, &column.field) {
        (Some(text), _) => {
            let text = text.clone();
            spec.render(move |_: &Row| text.clone())
        }
        (None, Some(field)) if format != ColumnFormat::Plain => {
            let field = field.clone();
            let symbol = currency_symbol.to_string();
            spec.render(move |row: &Row| {
                format
                    .apply(&row.field(&field), &symbol)
                    .unwrap_or_else(|| EMPTY_CELL.to_string())
            })
        }
        _ => spec,
    }
}

/// Row classifier from `[[row_classes]]` rules, or `None` when there are none.
///
/// A rule matches when the field's string form equals `equals`, ignoring
/// case. The first matching rule wins.
pub fn row_classifier(rules: &[RowClassRule]) -> Option<impl Fn(&Row) -> Option<String>> {
    if rules.is_empty() {
        return None;
    }
    let rules = rules.to_vec();
    Some(move |row: &Row| {
        rules
            .iter()
            .find(|rule| {
                let value = row.field(&rule.field);
                !value.is_null() && value.string_form().eq_ignore_ascii_case(&rule.equals)
            })
            .map(|rule| rule.class.clone())
    })
}
