#![allow(
    clippy::unwrap_used,
    clippy::panic,
    clippy::expect_used,
    clippy::print_stdout
)]

/// Benchmarks for the query-string store hot paths: the all-params view,
/// occurrence matching and the mutation/rebuild cycle.
use criterion::{Criterion, criterion_group, criterion_main};
use qsync::{ParamMatch, QueryStringStore, StoreOptions};
use std::hint::black_box;

const MEDIUM_QUERY: &str =
    "view=grid&page=12&sort=price&f[]=new&f[]=sale&f[]=popular&dates[]=2024-01-03\
     &dates[]=2024-01-01&dates[]=2024-01-02&q=leather%20boots&open=1";

fn headless(query_string: &str) -> QueryStringStore {
    QueryStringStore::headless(StoreOptions {
        query_string: Some(query_string),
        auto_sync: false,
        ..StoreOptions::default()
    })
}

fn bench_all_params(c: &mut Criterion) {
    let store = headless(MEDIUM_QUERY);
    c.bench_function("all_params_medium_query", |b| {
        b.iter(|| black_box(store.all_params()));
    });
}

fn bench_first_value(c: &mut Criterion) {
    let store = headless(MEDIUM_QUERY);
    c.bench_function("first_value_late_key", |b| {
        b.iter(|| black_box(store.first_value("open")));
    });
}

fn bench_has_param(c: &mut Criterion) {
    let store = headless(MEDIUM_QUERY);
    let matcher = ParamMatch::pair("f[]", "sale");
    c.bench_function("has_param_pair", |b| {
        b.iter(|| black_box(store.has_param(&matcher)));
    });
}

fn bench_update_param(c: &mut Criterion) {
    c.bench_function("update_param_existing_key", |b| {
        b.iter(|| {
            let mut store = headless(MEDIUM_QUERY);
            store.update_param("page", "13");
            black_box(store.query_string().len())
        });
    });
}

fn bench_remove_key(c: &mut Criterion) {
    c.bench_function("remove_key_list_occurrences", |b| {
        b.iter(|| {
            let mut store = headless(MEDIUM_QUERY);
            store.remove_key("f[]", false);
            black_box(store.query_string().len())
        });
    });
}

fn bench_date_list(c: &mut Criterion) {
    let store = headless(MEDIUM_QUERY);
    c.bench_function("date_list_default_key", |b| {
        b.iter(|| black_box(store.date_list()));
    });
}

criterion_group!(
    benches,
    bench_all_params,
    bench_first_value,
    bench_has_param,
    bench_update_param,
    bench_remove_key,
    bench_date_list
);
criterion_main!(benches);
