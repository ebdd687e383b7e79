use std::hint::black_box;
use std::io;

use criterion::{criterion_group, criterion_main, Criterion};

use rating_report::ingestion::parse_document;
use rating_report::report::report_document;

fn ratings_json(n: usize) -> String {
    let body = (0..n)
        .map(|i| format!(r#"{{"id":{i},"title":"item-{i}","rating":{}}}"#, (i % 50) as f64 / 10.0))
        .collect::<Vec<_>>()
        .join(",");
    format!("[{body}]")
}

fn bench_summary(c: &mut Criterion) {
    let input = ratings_json(10_000);
    let doc = parse_document(&input).unwrap();

    c.bench_function("parse_document_10k", |b| {
        b.iter(|| parse_document(black_box(&input)).unwrap())
    });

    c.bench_function("report_document_10k", |b| {
        b.iter(|| report_document(black_box(&doc), &mut io::sink()).unwrap())
    });
}

criterion_group!(benches, bench_summary);
criterion_main!(benches);
