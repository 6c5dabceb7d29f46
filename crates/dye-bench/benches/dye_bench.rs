//! Benchmarks for dye operations.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dye::prelude::*;

fn sample_colors(count: usize) -> Vec<Color> {
    (0..count)
        .map(|i| {
            let v = (i * 37 % 256) as f64;
            Color::rgb(v, 255.0 - v, (i % 256) as f64)
        })
        .collect()
}

/// Benchmark RGB <-> HSL conversion.
fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    for size in [100, 10_000] {
        let colors = sample_colors(size);
        let hsl: Vec<Color> = colors.iter().map(Color::to_hsl).collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("rgb_to_hsl", size), &colors, |b, v| {
            b.iter(|| v.iter().map(|c| black_box(c).to_hsl()).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("hsl_to_rgb", size), &hsl, |b, v| {
            b.iter(|| v.iter().map(|c| black_box(c).to_rgb()).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("rgb_to_hsla", size), &colors, |b, v| {
            b.iter(|| {
                v.iter()
                    .map(|c| convert(black_box(c), ColorSpace::Hsla))
                    .collect::<Result<Vec<_>>>()
            })
        });
    }

    group.finish();
}

/// Benchmark expression parsing through each notation.
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    let inputs = [
        ("name", "cornflowerBlue"),
        ("hex_short", "#0af"),
        ("hex_long", "#6495ed"),
        ("rgb", "rgb(100, 149, 237)"),
        ("hsla_percent", "hsla(50%, 0.1, 25%, .4)"),
    ];
    for (label, input) in inputs {
        group.bench_with_input(BenchmarkId::new("parse_color", label), input, |b, s| {
            b.iter(|| parse_color(black_box(s)))
        });
    }

    group.finish();
}

/// Benchmark serialization.
fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");

    let opaque = Color::hsl(219.0, 0.79, 0.66);
    let translucent = Color::rgba(0.0, 128.0, 255.0, 0.5);

    group.bench_function("to_hex", |b| b.iter(|| to_hex(black_box(&opaque))));
    group.bench_function("to_function", |b| b.iter(|| to_function(black_box(&opaque))));
    group.bench_function("to_string_rgba", |b| b.iter(|| black_box(&translucent).to_string()));

    group.finish();
}

/// Benchmark mixing and scheme generation.
fn bench_derive(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive");

    let a = Color::rgb(200.0, 100.0, 50.0);
    let b = Color::hsla(210.0, 0.5, 0.5, 0.5);

    for mode in MixMode::ALL {
        group.bench_function(BenchmarkId::new("mix", mode), |bench| {
            bench.iter(|| black_box(&a).mix_with(black_box(&b), mode))
        });
    }

    for kind in [SchemeKind::Shade, SchemeKind::Tetradic] {
        group.bench_function(BenchmarkId::new("scheme", kind), |bench| {
            bench.iter(|| black_box(&b).scheme(kind, SchemeOptions::default()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_convert, bench_parse, bench_serialize, bench_derive);
criterion_main!(benches);
