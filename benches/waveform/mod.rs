//! Benchmarks for eager waveform evaluation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_waveforms::{
    math::{f32x8, Numeric},
    Units, Waveform,
};

use crate::BLOCK_SIZES;

pub fn bench_eager(c: &mut Criterion) {
    let mut group = c.benchmark_group("waveform/eager");

    for &size in BLOCK_SIZES {
        let phases: Vec<f32> = (0..size).map(|i| i as f32 * 0.01).collect();
        let mut buffer = vec![0.0f32; size];

        for waveform in Waveform::ALL {
            // One lane per call
            group.bench_with_input(
                BenchmarkId::new(format!("{}/scalar", waveform.name()), size),
                &size,
                |b, _| {
                    b.iter(|| {
                        for (out, &x) in buffer.iter_mut().zip(black_box(&phases)) {
                            *out = waveform.eval(Units::Radians, x);
                        }
                    })
                },
            );

            // Eight lanes per call
            group.bench_with_input(
                BenchmarkId::new(format!("{}/f32x8", waveform.name()), size),
                &size,
                |b, _| {
                    b.iter(|| {
                        for (out, x) in buffer
                            .chunks_exact_mut(8)
                            .zip(black_box(&phases).chunks_exact(8))
                        {
                            let x = <f32x8 as Numeric>::from_fn(|lane| x[lane]);
                            Numeric::store(waveform.eval(Units::Radians, x), out);
                        }
                    })
                },
            );
        }
    }

    group.finish();
}
