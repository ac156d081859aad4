//! Criterion benchmarks for filter design and per-sample streaming.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use windowed_fir::{FilterConfig, FilterType, WindowType};

const BLOCK_SIZE: usize = 1024;

/// Deterministic white noise from a simple LCG.
fn white_noise(len: usize) -> Vec<f32> {
    let mut state: u64 = 0xDEAD_BEEF_CAFE_BABE;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            ((state >> 33) as i32) as f32 / (i32::MAX as f32)
        })
        .collect()
}

fn config(taps: usize) -> FilterConfig {
    FilterConfig::new(taps, FilterType::BandStop, WindowType::Blackman, 0.1, 0.2)
}

fn bench_design(c: &mut Criterion) {
    let mut group = c.benchmark_group("design");

    for &taps in &[31, 127, 511] {
        group.bench_with_input(BenchmarkId::new("init", taps), &taps, |b, &taps| {
            b.iter(|| config(black_box(taps)).init().unwrap());
        });
    }

    group.finish();
}

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");
    let input = white_noise(BLOCK_SIZE);

    for &taps in &[15, 63, 255, 1023] {
        group.bench_with_input(BenchmarkId::new("block", taps), &taps, |b, &taps| {
            let mut filter = config(taps).init().unwrap();
            let mut buffer = input.clone();

            b.iter(|| {
                buffer.copy_from_slice(&input);
                filter.process_block_inplace(black_box(&mut buffer));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_design, bench_push);
criterion_main!(benches);
