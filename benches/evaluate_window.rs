//! Benchmarks for the window evaluator.
//!
//! Run:
//! - cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use tensura::core::evaluate::{evaluate, EvalParams};
use tensura::core::placement::PlacementMode;

const INTERVAL_SETS: [&[u32]; 3] = [&[11, 7], &[11, 7, 16], &[11, 7, 16, 4, 9]];

fn bench_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_window");
    for intervals in INTERVAL_SETS {
        for mode in [
            PlacementMode::Uniform,
            PlacementMode::PrefixSlack,
            PlacementMode::PrefixDominance,
            PlacementMode::Repulsion,
        ] {
            let params = EvalParams {
                mode,
                roughness_gamma: 0.5,
                ..Default::default()
            };
            group.bench_with_input(
                BenchmarkId::new(mode.name(), intervals.len()),
                &params,
                |b, params| {
                    b.iter(|| {
                        let res = evaluate(black_box(intervals), &[], &[3], params).unwrap();
                        black_box(res)
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_modes);
criterion_main!(benches);
