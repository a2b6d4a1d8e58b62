use criterion::{Criterion, criterion_group, criterion_main};
use marklog_engine::{Document, Granularity, group_by_period, parse_entries, parse_header};
mod common;

fn bench_entries(c: &mut Criterion) {
    let mut group = c.benchmark_group("entries");
    group.sample_size(20);

    let doc = Document::new(&common::generate_learning_log(1000));
    group.bench_function("parse_1000", |b| {
        b.iter(|| {
            let parsed = parse_entries(std::hint::black_box(&doc));
            std::hint::black_box(parsed);
        });
    });

    let entries = parse_entries(&doc).value;
    group.bench_function("group_by_week_1000", |b| {
        b.iter(|| {
            let groups = group_by_period(std::hint::black_box(&entries), Granularity::Week);
            std::hint::black_box(groups);
        });
    });

    group.finish();
}

fn bench_header(c: &mut Criterion) {
    let mut group = c.benchmark_group("header");

    let doc = Document::new(&common::generate_frontmatter(200));
    group.bench_function("parse_200_keys", |b| {
        b.iter(|| {
            let parsed = parse_header(std::hint::black_box(&doc));
            std::hint::black_box(parsed);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_entries, bench_header);
criterion_main!(benches);
