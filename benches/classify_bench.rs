//! Performance benchmarks for keyword classification.
//!
//! Run with: cargo bench
//!
//! These benchmarks establish baseline performance metrics for:
//! - Early matches (first category hits)
//! - Late matches (last category hits, full table scan)
//! - The fallback path over texts of various lengths

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use maum::Classifier;

/// Benchmark classification of texts that hit a keyword.
fn bench_keyword_match(c: &mut Criterion) {
    let classifier = Classifier::default();
    let mut group = c.benchmark_group("keyword_match");

    let cases = vec![
        ("first_category", "너무 슬퍼"),
        ("last_category", "어이쿠 깜짝이야"),
        ("overlapping", "나는 오늘 좋았고 기쁨도 느꼈지만 짜증도 났다"),
    ];

    for (name, text) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), &text, |b, text| {
            b.iter(|| {
                let result = classifier.classify(black_box(text));
                black_box(result);
            });
        });
    }

    group.finish();
}

/// Benchmark the fallback path on unmatched texts of increasing length.
fn bench_fallback(c: &mut Criterion) {
    let classifier = Classifier::default();
    let mut group = c.benchmark_group("fallback");

    let filler = "오늘은 평범한 하루였다 ";
    let sizes = vec![("1x", 1), ("100x", 100), ("1000x", 1000)];

    for (name, repeats) in sizes {
        let text = filler.repeat(repeats);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &text, |b, text| {
            b.iter(|| {
                let result = classifier.classify(black_box(text));
                black_box(result);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_keyword_match, bench_fallback);
criterion_main!(benches);
