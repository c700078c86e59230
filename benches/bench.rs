// Criterion benchmarks for LexMatch

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lexmatch::core::{filter_records, sort_records, KeywordMap, Matcher};
use lexmatch::models::{Domain, FilterOptions, SortKey};
use lexmatch::store::generate_directory;

fn bench_keyword_resolution(c: &mut Criterion) {
    let keywords = KeywordMap::default();

    c.bench_function("resolve_short_query", |b| {
        b.iter(|| keywords.resolve(black_box("divorce lawyer near me")));
    });

    c.bench_function("resolve_long_query", |b| {
        b.iter(|| {
            keywords.resolve(black_box(
                "my landlord is threatening eviction over unpaid rent and I also \
                 have a pending consumer refund complaint about a defective car",
            ))
        });
    });

    c.bench_function("resolve_miss", |b| {
        b.iter(|| keywords.resolve(black_box("entirely unrelated sentence")));
    });
}

fn bench_recommend(c: &mut Criterion) {
    let matcher = Matcher::with_default_keywords();

    let mut group = c.benchmark_group("recommend");

    for directory_size in [10, 50, 100, 500, 1000].iter() {
        let directory = generate_directory(*directory_size, 42);

        group.bench_with_input(
            BenchmarkId::new("keyword_hit", directory_size),
            directory_size,
            |b, _| {
                b.iter(|| {
                    matcher.recommend(
                        black_box("divorce and custody"),
                        black_box(&directory),
                        black_box(10),
                    )
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("fallback", directory_size),
            directory_size,
            |b, _| {
                b.iter(|| {
                    matcher.recommend(
                        black_box("unrecognizable"),
                        black_box(&directory),
                        black_box(10),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_filtering(c: &mut Criterion) {
    let directory = generate_directory(1000, 42);
    let options = FilterOptions {
        domain: Some(Domain::CriminalLaw),
        min_experience: Some(5),
        min_rating: Some(4.0),
        max_fees: Some(10_000.0),
        ..FilterOptions::default()
    };

    c.bench_function("filter_1000_records", |b| {
        b.iter(|| filter_records(black_box(&directory), black_box(&options)));
    });
}

fn bench_sorting(c: &mut Criterion) {
    let directory = generate_directory(1000, 42);

    let mut group = c.benchmark_group("sort_1000_records");
    for key in [
        SortKey::Rating,
        SortKey::Experience,
        SortKey::FeesLow,
        SortKey::FeesHigh,
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(key), &key, |b, &key| {
            b.iter(|| sort_records(black_box(&directory), black_box(key)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_keyword_resolution,
    bench_recommend,
    bench_filtering,
    bench_sorting
);

criterion_main!(benches);
