//! Benchmarks for batch generation and frame evaluation.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fallfield::{generate_batch, Style, Vec2};

fn bench_generate_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_batch");

    for count in [20usize, 200, 2_000] {
        group.bench_with_input(BenchmarkId::new("backend", count), &count, |b, &count| {
            b.iter(|| black_box(generate_batch(count, Style::Backend)))
        });
    }

    group.bench_function("security_20", |b| {
        b.iter(|| black_box(generate_batch(20, Style::Security)))
    });

    group.finish();
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");
    let viewport = Vec2::new(1920.0, 1080.0);

    for count in [20usize, 200, 2_000] {
        let batch = generate_batch(count, Style::Backend);
        group.bench_with_input(BenchmarkId::new("evaluate", count), &batch, |b, batch| {
            let mut t = 0.0f32;
            b.iter(|| {
                t += 1.0 / 60.0;
                black_box(batch.frame(t, viewport))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate_batch, bench_frame);
criterion_main!(benches);
