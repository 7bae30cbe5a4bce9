//! Benchmarks for lazy expression rendering.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_waveforms::{
    dsp::{jaehne, swept},
    graph::{linspace, render},
    sinenorm, trianglenorm,
};

use crate::BLOCK_SIZES;

pub fn bench_wave(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph/wave");

    for &size in BLOCK_SIZES {
        let mut f32_buffer = vec![0.0f32; size];
        let mut f64_buffer = vec![0.0f64; size];

        // Fast polynomial sine behind a ramp
        group.bench_with_input(BenchmarkId::new("sinenorm/f32", size), &size, |b, &size| {
            b.iter(|| {
                let node = sinenorm(linspace(0.0f32, 16.0, size, false));
                render(black_box(&node), &mut f32_buffer);
            })
        });

        group.bench_with_input(BenchmarkId::new("sinenorm/f64", size), &size, |b, &size| {
            b.iter(|| {
                let node = sinenorm(linspace(0.0f64, 16.0, size, false));
                render(black_box(&node), &mut f64_buffer);
            })
        });

        // Piecewise-linear, no transcendental
        group.bench_with_input(BenchmarkId::new("trianglenorm/f32", size), &size, |b, &size| {
            b.iter(|| {
                let node = trianglenorm(linspace(0.0f32, 16.0, size, false));
                render(black_box(&node), &mut f32_buffer);
            })
        });
    }

    group.finish();
}

pub fn bench_test_signal(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph/test_signal");

    for &size in BLOCK_SIZES {
        group.bench_with_input(BenchmarkId::new("jaehne", size), &size, |b, &size| {
            b.iter(|| black_box(jaehne(1.0f32, size)))
        });

        group.bench_with_input(BenchmarkId::new("swept", size), &size, |b, &size| {
            b.iter(|| black_box(swept(1.0f32, size)))
        });
    }

    group.finish();
}
