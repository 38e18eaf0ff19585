mod common;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::collections::HashMap;
use textbook_dsa::{ChainedHashTable, TableConfig};
use common::{bench_config, key, lcg};

fn bench_insert_fresh_100k(c: &mut Criterion) {
    c.bench_function("chained::insert_fresh_100k", |b| {
        b.iter_batched(
            ChainedHashTable::<String, u64>::new,
            |mut t| {
                for (i, x) in lcg(1).take(100_000).enumerate() {
                    t.insert(key(x), i as u64);
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });

    c.bench_function("std::insert_fresh_100k", |b| {
        b.iter_batched(
            HashMap::<String, u64>::new,
            |mut m| {
                for (i, x) in lcg(1).take(100_000).enumerate() {
                    m.insert(key(x), i as u64);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

// Pre-sized so no resize happens inside the timed loop.
fn bench_insert_presized_100k(c: &mut Criterion) {
    c.bench_function("chained::insert_presized_100k", |b| {
        b.iter_batched(
            || {
                ChainedHashTable::<String, u64>::with_config(
                    TableConfig::default().with_initial_capacity(200_000),
                )
                .unwrap()
            },
            |mut t| {
                for (i, x) in lcg(3).take(100_000).enumerate() {
                    t.insert(key(x), i as u64);
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_remove_random_10k(c: &mut Criterion) {
    c.bench_function("chained::remove_random_10k_of_110k", |b| {
        b.iter_batched(
            || {
                let keys: Vec<String> = lcg(5).take(110_000).map(key).collect();
                let mut t = ChainedHashTable::new();
                for (i, k) in keys.iter().enumerate() {
                    t.insert(k.clone(), i as u64);
                }
                // Precompute 10k unique victims via a second LCG
                let n = keys.len();
                let mut sel = std::collections::HashSet::with_capacity(10_000);
                let mut s = 0x9e3779b97f4a7c15u64;
                while sel.len() < 10_000 {
                    s = s.wrapping_mul(2862933555777941757).wrapping_add(3037000493);
                    sel.insert((s as usize) % n);
                }
                let victims: Vec<String> = sel.into_iter().map(|i| keys[i].clone()).collect();
                (t, victims)
            },
            |(mut t, victims)| {
                for k in &victims {
                    black_box(t.remove(k.as_str()));
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_find_hit_and_miss_10k(c: &mut Criterion) {
    let keys: Vec<String> = lcg(7).take(100_000).map(key).collect();
    let mut t = ChainedHashTable::new();
    for (i, k) in keys.iter().enumerate() {
        t.insert(k.clone(), i as u64);
    }
    let n = keys.len();
    let mut s = 0x9e3779b97f4a7c15u64;
    let hits: Vec<String> = (0..10_000)
        .map(|_| {
            s = s.wrapping_mul(2862933555777941757).wrapping_add(3037000493);
            keys[(s as usize) % n].clone()
        })
        .collect();
    let misses: Vec<String> = lcg(0xdead_beef).take(10_000).map(key).collect();

    c.bench_function("chained::find_hit_10k_on_100k", |b| {
        b.iter(|| {
            for k in &hits {
                black_box(t.get(k.as_str()));
            }
        })
    });
    c.bench_function("chained::find_miss_10k_on_100k", |b| {
        b.iter(|| {
            for k in &misses {
                black_box(t.get(k.as_str()));
            }
        })
    });
}

// A load limit far above 1 keeps chains long and shows the cost of walking
// them.
fn bench_long_chains(c: &mut Criterion) {
    c.bench_function("chained::find_hit_10k_load_8", |b| {
        let cfg = TableConfig::default()
            .with_initial_capacity(1_024)
            .with_load_factor_limit(8.0);
        let mut t = ChainedHashTable::with_config(cfg).unwrap();
        let keys: Vec<u64> = lcg(13).take(8_000).collect();
        for k in &keys {
            t.insert(*k, *k);
        }
        b.iter(|| {
            let mut sum = 0u64;
            for k in keys.iter().cycle().take(10_000) {
                if let Some(v) = t.get(k) {
                    sum = sum.wrapping_add(*v);
                }
            }
            black_box(sum)
        })
    });
}

fn bench_iter_100k(c: &mut Criterion) {
    c.bench_function("chained::iter_all_100k", |b| {
        let mut t = ChainedHashTable::new();
        for (i, x) in lcg(999).take(100_000).enumerate() {
            t.insert(key(x), i as u64);
        }
        b.iter(|| {
            let mut sum = 0u64;
            for (_k, v) in t.iter() {
                sum = sum.wrapping_add(*v);
            }
            black_box(sum)
        })
    });
}

criterion_group! {
    name = benches_insert;
    config = bench_config(12);
    targets = bench_insert_fresh_100k, bench_insert_presized_100k
}
criterion_group! {
    name = benches_ops;
    config = bench_config(12);
    targets = bench_remove_random_10k,
              bench_find_hit_and_miss_10k,
              bench_long_chains,
              bench_iter_100k
}
criterion_main!(benches_insert, benches_ops);
