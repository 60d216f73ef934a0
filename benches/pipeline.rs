//! Pipeline throughput benchmarks.
//!
//! Measures the cost of fused multi-stage traversals against the equivalent
//! hand-rolled loop, and the payoff of materializing with `eval` before
//! repeated terminal passes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use seq::prelude::*;

fn bench_fused_pipeline(c: &mut Criterion) {
    c.bench_function("map_filter_sum_10k", |b| {
        b.iter(|| {
            let total: i64 = iota(0i64, 1)
                .take(10_000)
                .map(|x| x * x)
                .filter(|x| x % 3 != 0)
                .sum();
            black_box(total)
        })
    });

    c.bench_function("hand_rolled_loop_10k", |b| {
        b.iter(|| {
            let mut total = 0i64;
            for x in 0..10_000i64 {
                let sq = x * x;
                if sq % 3 != 0 {
                    total += sq;
                }
            }
            black_box(total)
        })
    });
}

fn bench_eval_replay(c: &mut Criterion) {
    c.bench_function("replay_after_eval_1k", |b| {
        let cached = iota(0i64, 1).take(1_000).map(|x| x * 3).eval();
        b.iter(|| black_box(cached.sum()))
    });

    c.bench_function("recompute_without_eval_1k", |b| {
        let chain = iota(0i64, 1).take(1_000).map(|x| x * 3);
        b.iter(|| black_box(chain.sum()))
    });
}

fn bench_memoized_calls(c: &mut Criterion) {
    c.bench_function("memoized_hit_heavy", |b| {
        let f = memoize(|x: i64| (0..x).map(|i| i * i).sum::<i64>());
        f.call(512);
        b.iter(|| black_box(f.call(512)))
    });
}

criterion_group!(
    benches,
    bench_fused_pipeline,
    bench_eval_replay,
    bench_memoized_calls
);
criterion_main!(benches);
