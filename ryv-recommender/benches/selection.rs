//! Criterion benchmarks for daily selection.
//!
//! Measures selection time across catalogue sizes built by repeating the
//! shared sample articles.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package ryv-recommender
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::hint::black_box;

use chrono::{DateTime, TimeZone, Utc};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use ryv_core::ArticleSummary;
use ryv_core::test_support::sample_articles;
use ryv_recommender::DailySelector;

/// Catalogue sizes to benchmark.
const CATALOGUE_SIZES: &[usize] = &[10, 100, 1_000];

fn reference() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0)
        .single()
        .unwrap_or_else(|| panic!("valid reference instant"))
}

/// Build a catalogue of `size` articles with distinct identifiers.
fn catalogue(size: usize) -> Vec<ArticleSummary> {
    let samples = sample_articles(reference());
    samples
        .iter()
        .cycle()
        .take(size)
        .zip(1_u64..)
        .map(|(article, id)| ArticleSummary {
            id,
            ..article.clone()
        })
        .collect()
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_daily");
    let selector = DailySelector::default();

    for &size in CATALOGUE_SIZES {
        let articles = catalogue(size);
        group.throughput(Throughput::Elements(u64::try_from(size).unwrap_or(u64::MAX)));
        group.bench_with_input(BenchmarkId::from_parameter(size), &articles, |b, articles| {
            b.iter(|| selector.select(black_box(articles), black_box(reference())));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_select);
criterion_main!(benches);
