// Helpers shared by the bench targets. Each target uses a subset.
#![allow(dead_code)]

use criterion::Criterion;
use std::time::Duration;

/// Deterministic key stream; the same seed always yields the same sequence.
pub fn lcg(mut state: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(state)
    })
}

/// Fixed-width string key, so every key hashes and compares at equal cost.
pub fn key(n: u64) -> String {
    format!("k{n:016x}")
}

pub fn bench_config(samples: usize) -> Criterion {
    Criterion::default()
        .sample_size(samples)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1))
}
