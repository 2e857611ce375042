//! Pipeline performance benchmarks.
//!
//! Measures the filter → sort → paginate derivation on a 100k-row table:
//! a fresh search, a fresh sort, and a page turn that reuses both stages.
//!
//! Run with: cargo bench

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use tabview::model::{ColumnSpec, Row, Value};
use tabview::source::parse_records;
use tabview::state::{PageNav, PageSize, TabularDataView};

const NUM_ROWS: usize = 100_000;

/// Rows with a numeric id, a text name, a nullable price and a category.
fn generate_rows() -> Vec<Row> {
    const CATEGORIES: [&str; 4] = ["hardware", "software", "service", "misc"];
    (0..NUM_ROWS)
        .map(|i| {
            let price = if i % 17 == 0 {
                Value::Null
            } else {
                Value::from((i * 7919 % 10_000) as f64 / 100.0)
            };
            Row::new()
                .with("id", i as i64)
                .with("name", format!("Product {:06}", (i * 31) % NUM_ROWS))
                .with("price", price)
                .with("category", CATEGORIES[i % CATEGORIES.len()])
        })
        .collect()
}

fn columns() -> Vec<ColumnSpec<Row>> {
    vec![
        ColumnSpec::field("ID", "id"),
        ColumnSpec::field("Name", "name"),
        ColumnSpec::field("Price", "price"),
        ColumnSpec::field("Category", "category"),
    ]
}

fn table() -> TabularDataView<Row> {
    let mut table = TabularDataView::new(columns()).with_data(generate_rows());
    table.set_page_size(PageSize::Hundred);
    table
}

fn bench_search(c: &mut Criterion) {
    let base = table();
    c.bench_function("search_100k_rows", |b| {
        b.iter_batched(
            || base.data().to_vec(),
            |rows| {
                let mut table = TabularDataView::new(columns()).with_data(rows);
                table.set_search_term(black_box("product 0421"));
                black_box(table.total())
            },
            BatchSize::LargeInput,
        );
    });
}

fn bench_sort(c: &mut Criterion) {
    let base = table();
    c.bench_function("sort_100k_rows_by_price", |b| {
        b.iter_batched(
            || base.data().to_vec(),
            |rows| {
                let mut table = TabularDataView::new(columns()).with_data(rows);
                table.click_header(black_box(2));
                black_box(table.page_rows().len())
            },
            BatchSize::LargeInput,
        );
    });
}

fn bench_page_turn(c: &mut Criterion) {
    let mut table = table();
    table.set_search_term("product");
    table.click_header(1);

    c.bench_function("page_turn_reuses_derived_rows", |b| {
        b.iter(|| {
            if !table.navigate(PageNav::Next) {
                table.navigate(PageNav::First);
            }
            black_box(table.page_rows().len())
        });
    });
}

fn bench_parse(c: &mut Criterion) {
    let document = serde_json::to_string(
        &(0..10_000)
            .map(|i| serde_json::json!({"id": i, "name": format!("Product {}", i), "price": i}))
            .collect::<Vec<_>>(),
    )
    .expect("serialize benchmark document");

    c.bench_function("parse_10k_records", |b| {
        b.iter(|| parse_records(black_box(&document)).map(|loaded| loaded.rows.len()));
    });
}

criterion_group!(benches, bench_search, bench_sort, bench_page_turn, bench_parse);
criterion_main!(benches);
