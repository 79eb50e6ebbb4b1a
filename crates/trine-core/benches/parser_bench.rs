//! Benchmarks for the term parser and vocabulary scan.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use trine_common::types::KeyMode;
use trine_core::parser::{parse_quad, parse_triple};
use trine_core::{NoProgress, VocabularyBuilder, VocabularyConfig};

fn sample_lines(n: usize) -> String {
    let mut out = String::with_capacity(n * 96);
    for i in 0..n {
        let object = match i % 3 {
            0 => format!("\"{}\"", i % 1000),
            1 => format!("<http://example.org/resource/{}>", i % 5000),
            _ => format!("\"label {}\"@en", i % 700),
        };
        out.push_str(&format!(
            "<http://example.org/resource/{}> <http://example.org/prop/{}> {} <http://example.org/graph> .\n",
            i % 10_000,
            i % 40,
            object
        ));
    }
    out
}

fn bench_parse_quad(c: &mut Criterion) {
    let input = sample_lines(10_000);
    c.bench_function("parse_quad_10000", |b| {
        b.iter(|| {
            for line in input.as_bytes().split_inclusive(|&b| b == b'\n') {
                black_box(parse_quad(line).ok());
            }
        });
    });
}

fn bench_parse_triple(c: &mut Criterion) {
    let input = sample_lines(10_000);
    c.bench_function("parse_triple_10000", |b| {
        b.iter(|| {
            for line in input.as_bytes().split_inclusive(|&b| b == b'\n') {
                black_box(parse_triple(line).ok());
            }
        });
    });
}

fn bench_vocabulary_build(c: &mut Criterion) {
    let input = sample_lines(50_000);
    let mut group = c.benchmark_group("vocabulary_build");

    for key_mode in [KeyMode::Raw, KeyMode::Hashed] {
        let builder =
            VocabularyBuilder::new(VocabularyConfig::default().with_key_mode(key_mode));
        let label = if key_mode.is_hashed() {
            "hashed"
        } else {
            "raw"
        };

        group.bench_with_input(BenchmarkId::new("sequential", label), &input, |b, input| {
            b.iter(|| black_box(builder.build(input.as_bytes()).ok()));
        });
        group.bench_with_input(BenchmarkId::new("sharded_4", label), &input, |b, input| {
            b.iter(|| black_box(builder.build_sharded(input.as_bytes(), 4, &NoProgress).ok()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_quad,
    bench_parse_triple,
    bench_vocabulary_build,
);

criterion_main!(benches);
