//! ChainedHashTable: separate chaining over an owned bucket array.
//!
//! Every entry caches the `u64` hash of its key. The home bucket of an entry
//! is always `hash % capacity`, and a resize re-homes entries from the cached
//! hash alone, so `K: Hash` never runs during a resize.
//!
//! Growth is checked before an entry is appended: when
//! `len / capacity >= load_factor_limit` the bucket array is replaced by one
//! `resize_factor` times larger. With the default factor of 4 the amortized
//! cost per insert stays O(1).

use crate::error::{Error, Result};
use crate::reentrancy::DebugReentrancy;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::iter::{Flatten, FusedIterator};
use log::debug;
use std::collections::hash_map::RandomState;

/// What `insert` does when the key is already present.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum DuplicatePolicy {
    /// Overwrite the stored value and hand back the previous one.
    #[default]
    Replace,
    /// Append a second entry to the chain. Lookups and removals keep
    /// resolving to the earlier entry, so the later one stays shadowed until
    /// the earlier one is removed.
    Append,
}

/// Construction-time knobs for [`ChainedHashTable`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TableConfig {
    pub initial_capacity: usize,
    pub load_factor_limit: f64,
    pub resize_factor: usize,
    pub duplicate_policy: DuplicatePolicy,
}

impl TableConfig {
    pub const DEFAULT_INITIAL_CAPACITY: usize = 1000;
    pub const DEFAULT_LOAD_FACTOR_LIMIT: f64 = 0.75;
    pub const DEFAULT_RESIZE_FACTOR: usize = 4;

    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    pub fn with_load_factor_limit(mut self, limit: f64) -> Self {
        self.load_factor_limit = limit;
        self
    }

    pub fn with_resize_factor(mut self, factor: usize) -> Self {
        self.resize_factor = factor;
        self
    }

    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(Error::invalid("initial capacity must be at least 1"));
        }
        if !self.load_factor_limit.is_finite() || self.load_factor_limit <= 0.0 {
            return Err(Error::invalid(format!(
                "load factor limit must be a positive finite number, got {}",
                self.load_factor_limit
            )));
        }
        if self.resize_factor < 2 {
            return Err(Error::invalid(format!(
                "resize factor must be at least 2, got {}",
                self.resize_factor
            )));
        }
        Ok(())
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            load_factor_limit: Self::DEFAULT_LOAD_FACTOR_LIMIT,
            resize_factor: Self::DEFAULT_RESIZE_FACTOR,
            duplicate_policy: DuplicatePolicy::Replace,
        }
    }
}

#[derive(Clone, Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
    hash: u64,
}

type Chain<K, V> = Vec<Entry<K, V>>;

#[inline]
fn bucket_index(hash: u64, capacity: usize) -> usize {
    (hash % capacity as u64) as usize
}

#[derive(Clone)]
pub struct ChainedHashTable<K, V, S = RandomState> {
    hasher: S,
    buckets: Vec<Chain<K, V>>,
    len: usize,
    config: TableConfig,
    reentrancy: DebugReentrancy,
}

impl<K, V> ChainedHashTable<K, V>
where
    K: Eq + Hash,
{
    /// Empty table with the default configuration (1000 buckets, load factor
    /// limit 0.75, growth factor 4, replace on duplicate keys).
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }

    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_config(TableConfig::default().with_initial_capacity(capacity))
    }

    pub fn with_config(config: TableConfig) -> Result<Self> {
        Self::with_config_and_hasher(config, RandomState::new())
    }
}

impl<K, V> Default for ChainedHashTable<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> ChainedHashTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self::from_valid_config(TableConfig::default(), hasher)
    }

    pub fn with_config_and_hasher(config: TableConfig, hasher: S) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config, hasher))
    }

    fn from_valid_config(config: TableConfig, hasher: S) -> Self {
        let mut buckets = Vec::with_capacity(config.initial_capacity);
        buckets.resize_with(config.initial_capacity, Vec::new);
        Self {
            hasher,
            buckets,
            len: 0,
            config,
            reentrancy: DebugReentrancy::new(),
        }
    }

    fn make_hash<Q>(&self, q: &Q) -> u64
    where
        Q: ?Sized + Hash,
    {
        self.hasher.hash_one(q)
    }

    /// Number of live entries, shadowed duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    /// Stores `value` under `key`.
    ///
    /// Under [`DuplicatePolicy::Replace`] an existing entry keeps its place
    /// in the chain, takes the new value, and the old value is returned.
    /// Otherwise a new entry is appended and `None` is returned; this may
    /// grow the bucket array first.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let _g = self.reentrancy.enter();
        let hash = self.make_hash(&key);

        if self.config.duplicate_policy == DuplicatePolicy::Replace {
            let idx = bucket_index(hash, self.buckets.len());
            if let Some(entry) = self.buckets[idx]
                .iter_mut()
                .find(|e| e.hash == hash && e.key == key)
            {
                return Some(core::mem::replace(&mut entry.value, value));
            }
        }

        if self.at_load_limit() {
            let new_capacity = self.buckets.len().saturating_mul(self.config.resize_factor);
            debug!(
                "resizing hash table from {} to {} buckets at {} entries",
                self.buckets.len(),
                new_capacity,
                self.len
            );
            Self::rehash(&mut self.buckets, new_capacity);
        }
        let idx = bucket_index(hash, self.buckets.len());
        self.buckets[idx].push(Entry { key, value, hash });
        self.len += 1;
        None
    }

    pub fn get<Q>(&self, q: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _g = self.reentrancy.enter();
        self.locate(q)
            .map(|(idx, pos)| &self.buckets[idx][pos].value)
    }

    pub fn get_mut<Q>(&mut self, q: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _g = self.reentrancy.enter();
        let (idx, pos) = self.locate(q)?;
        Some(&mut self.buckets[idx][pos].value)
    }

    pub fn get_key_value<Q>(&self, q: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _g = self.reentrancy.enter();
        self.locate(q).map(|(idx, pos)| {
            let e = &self.buckets[idx][pos];
            (&e.key, &e.value)
        })
    }

    pub fn contains_key<Q>(&self, q: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _g = self.reentrancy.enter();
        self.locate(q).is_some()
    }

    /// Removes the first entry matching `q` in chain order.
    pub fn remove<Q>(&mut self, q: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.remove_entry(q).map(|(_, v)| v)
    }

    pub fn remove_entry<Q>(&mut self, q: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _g = self.reentrancy.enter();
        let (idx, pos) = self.locate(q)?;
        let chain = &mut self.buckets[idx];
        let entry = chain.remove(pos);
        if chain.is_empty() {
            // Give the chain's allocation back.
            *chain = Vec::new();
        }
        self.len -= 1;
        Some((entry.key, entry.value))
    }

    /// Drops every entry but keeps the current bucket count.
    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            *chain = Vec::new();
        }
        self.len = 0;
    }

    /// Entries in bucket order, then chain order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.buckets.iter().flatten(),
            remaining: self.len,
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            inner: self.buckets.iter_mut().flatten(),
            remaining: self.len,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    // (bucket, position in chain) of the first match.
    fn locate<Q>(&self, q: &Q) -> Option<(usize, usize)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.make_hash(q);
        let idx = bucket_index(hash, self.buckets.len());
        self.buckets[idx]
            .iter()
            .position(|e| e.hash == hash && e.key.borrow() == q)
            .map(|pos| (idx, pos))
    }

    fn at_load_limit(&self) -> bool {
        self.load_factor() >= self.config.load_factor_limit
    }

    // Swaps in a bucket array of `new_capacity` and re-homes every entry by
    // its cached hash, old bucket order first, then old chain order.
    fn rehash(buckets: &mut Vec<Chain<K, V>>, new_capacity: usize) {
        let mut fresh: Vec<Chain<K, V>> = Vec::with_capacity(new_capacity);
        fresh.resize_with(new_capacity, Vec::new);
        let old = core::mem::replace(buckets, fresh);

        for entry in old.into_iter().flatten() {
            let idx = bucket_index(entry.hash, new_capacity);
            buckets[idx].push(entry);
        }
    }
}

/// Iterator over `(&K, &V)` in bucket-then-chain order.
pub struct Iter<'a, K, V> {
    inner: Flatten<core::slice::Iter<'a, Chain<K, V>>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let e = self.inner.next()?;
        self.remaining -= 1;
        Some((&e.key, &e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Iterator over `(&K, &mut V)` in bucket-then-chain order.
pub struct IterMut<'a, K, V> {
    inner: Flatten<core::slice::IterMut<'a, Chain<K, V>>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let e = self.inner.next()?;
        self.remaining -= 1;
        Some((&e.key, &mut e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}
impl<K, V> FusedIterator for IterMut<'_, K, V> {}

/// Owning iterator in bucket-then-chain order.
pub struct IntoIter<K, V> {
    inner: Flatten<std::vec::IntoIter<Chain<K, V>>>,
    remaining: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let e = self.inner.next()?;
        self.remaining -= 1;
        Some((e.key, e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V, S> IntoIterator for ChainedHashTable<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            remaining: self.len,
            inner: self.buckets.into_iter().flatten(),
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a ChainedHashTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, S> Extend<(K, V)> for ChainedHashTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for ChainedHashTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::with_hasher(S::default());
        table.extend(iter);
        table
    }
}

/// Renders `{k1=v1, k2=v2}` in bucket-then-chain order.
impl<K, V, S> fmt::Display for ChainedHashTable<K, V, S>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, e) in self.buckets.iter().flatten().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", e.key, e.value)?;
        }
        f.write_str("}")
    }
}

impl<K, V, S> fmt::Debug for ChainedHashTable<K, V, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.buckets.iter().flatten().map(|e| (&e.key, &e.value)))
            .finish()
    }
}
