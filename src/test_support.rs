#![cfg(test)]

// Shared fixtures for the in-crate unit and property tests.

use core::hash::{BuildHasher, Hasher};
use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Installs `env_logger` once per test binary. `RUST_LOG` overrides the
/// default `warn` level.
pub(crate) fn init_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();
        builder
            .filter_level(LevelFilter::Warn)
            .is_test(true)
            .parse_default_env();
        let _ = builder.try_init();
    });
}

/// Sends every key to the same hash so every lookup walks one chain.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ConstBuildHasher;

pub(crate) struct ConstHasher;

impl BuildHasher for ConstBuildHasher {
    type Hasher = ConstHasher;
    fn build_hasher(&self) -> Self::Hasher {
        ConstHasher
    }
}

impl Hasher for ConstHasher {
    fn write(&mut self, _bytes: &[u8]) {}
    fn finish(&self) -> u64 {
        0
    }
}

/// Hashes integer keys to themselves so bucket placement is predictable.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct IdentityBuildHasher;

#[derive(Default)]
pub(crate) struct IdentityHasher(u64);

impl BuildHasher for IdentityBuildHasher {
    type Hasher = IdentityHasher;
    fn build_hasher(&self) -> Self::Hasher {
        IdentityHasher(0)
    }
}

impl Hasher for IdentityHasher {
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 = (self.0 << 8) | u64::from(b);
        }
    }
    fn write_u64(&mut self, n: u64) {
        self.0 = n;
    }
    fn write_usize(&mut self, n: usize) {
        self.0 = n as u64;
    }
    fn write_u32(&mut self, n: u32) {
        self.0 = u64::from(n);
    }
    fn finish(&self) -> u64 {
        self.0
    }
}
