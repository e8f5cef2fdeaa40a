//! 子集合搜尋與分組的效能基準
//!
//! ```bash
//! cargo bench --package courier-calc
//! ```

use courier_calc::{group_to_capacity, max_subset_sum, WeightedItem};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

const SEED: u64 = 42;

/// 窮舉搜尋的包裹數
const EXHAUSTIVE_SIZES: &[usize] = &[8, 12, 16, 20];

/// 超過窮舉上限時的包裹數（走貪婪近似）
const GREEDY_SIZES: &[usize] = &[50, 200];

fn random_items(count: usize, seed: u64) -> Vec<WeightedItem> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|index| WeightedItem::new(index, Decimal::from(rng.gen_range(1u32..=150))))
        .collect()
}

fn bench_max_subset_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("max_subset_sum");
    let target = Decimal::from(200);

    for &size in EXHAUSTIVE_SIZES {
        let items = random_items(size, SEED);
        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.iter(|| max_subset_sum(black_box(items), black_box(target)));
        });
    }

    group.finish();
}

fn bench_group_to_capacity(c: &mut Criterion) {
    let mut group = c.benchmark_group("group_to_capacity");
    let max_weight = Decimal::from(200);

    for &size in EXHAUSTIVE_SIZES.iter().chain(GREEDY_SIZES) {
        let items = random_items(size, SEED);
        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.iter(|| group_to_capacity(black_box(items), max_weight, 24));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_max_subset_sum, bench_group_to_capacity);
criterion_main!(benches);
