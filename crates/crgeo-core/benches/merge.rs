use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use crgeo_core::{merge, District};
use std::hint::black_box;

fn districts(range: std::ops::Range<u32>) -> Vec<District> {
    range
        .map(|i| District::new(10_000 + i, format!("District {i}"), 100 + i / 20, 1.5))
        .collect()
}

fn bench_merge(c: &mut Criterion) {
    // Half the candidates collide with the existing store.
    let existing = districts(0..500);
    let candidates = districts(250..750);

    c.bench_function("merge 500 into 500 (50% overlap)", |b| {
        b.iter_batched(
            || (existing.clone(), candidates.clone()),
            |(e, c)| black_box(merge(e, c)),
            BatchSize::SmallInput,
        )
    });

    c.bench_function("re-merge fully applied batch", |b| {
        let applied = merge(existing.clone(), candidates.clone()).records;
        b.iter_batched(
            || (applied.clone(), candidates.clone()),
            |(e, c)| black_box(merge(e, c)),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_merge);
criterion_main!(benches);
