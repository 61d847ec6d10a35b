#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use snoise_utils::noise::PermutationTable;
use snoise_utils::random::Random;
use snoise_utils::random::libc_random::LibcRandom;
use std::hint::black_box;

fn bench_seed(c: &mut Criterion) {
    c.bench_function("libc_random_from_seed", |b| {
        b.iter(|| black_box(LibcRandom::from_seed(black_box(42))));
    });
}

fn bench_next(c: &mut Criterion) {
    let mut rng = LibcRandom::from_seed(42);
    c.bench_function("libc_random_next_i32", |b| {
        b.iter(|| black_box(rng.next_i32()));
    });
}

fn bench_table_rebuild(c: &mut Criterion) {
    let mut table = PermutationTable::from_seed(0);
    let mut seed = 0u32;
    c.bench_function("permutation_table_rebuild", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            table.rebuild(Some(black_box(seed)));
        });
    });
}

criterion_group!(benches, bench_seed, bench_next, bench_table_rebuild);
criterion_main!(benches);
