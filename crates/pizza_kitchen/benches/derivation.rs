mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pizza_kitchen::prelude::{shuffle, Derivation, Seed, ValueRange};

fn derivation_draw_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("derivation/draw");
    group.throughput(common::elements_throughput(1));

    group.bench_function("next_uint", |b| {
        let mut d = Derivation::new(Seed::from_u64(0xC0FFEE));
        b.iter(|| black_box(d.next_uint("bench")));
    });

    group.bench_function("next_float", |b| {
        let mut d = Derivation::new(Seed::from_u64(0xC0FFEE));
        b.iter(|| black_box(d.next_float("bench")));
    });

    group.bench_function("select_value", |b| {
        let mut d = Derivation::new(Seed::from_u64(0xC0FFEE));
        let range = ValueRange {
            min: 425.0,
            max: 550.0,
        };
        b.iter(|| black_box(d.select_value(range, "baking-temp")));
    });

    group.finish();
}

fn derivation_shuffle_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("derivation/shuffle");

    for &n in &[8usize, 64, 512, 4096] {
        group.throughput(common::elements_throughput(n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut d = Derivation::new(Seed::from_u64(0xDEADBEEF));
            b.iter(|| black_box(shuffle(&mut d, (0..n).collect::<Vec<_>>())));
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = derivation_draw_benches, derivation_shuffle_benches
}
criterion_main!(benches);
