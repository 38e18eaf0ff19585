//! Graph: a directed graph over hashable node values.
//!
//! Node payloads live in a `SlotMap` and are found by value through a
//! `hashbrown::HashTable` of slot keys, each node caching its own hash so the
//! index can be rebuilt without rehashing values. Successor lists hold slot
//! keys, not values. Nodes and each node's successors keep insertion order.

use crate::reentrancy::DebugReentrancy;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use hashbrown::hash_table::Entry;
use hashbrown::HashTable;
use log::debug;
use slotmap::{new_key_type, SlotMap};
use std::collections::hash_map::RandomState;

new_key_type! {
    pub(crate) struct NodeKey;
}

struct Node<T> {
    value: T,
    hash: u64,
    successors: Vec<NodeKey>,
}

pub struct Graph<T, S = RandomState> {
    hasher: S,
    index: HashTable<NodeKey>,
    nodes: SlotMap<NodeKey, Node<T>>,
    order: Vec<NodeKey>,
    edge_count: usize,
    reentrancy: DebugReentrancy,
}

impl<T> Graph<T>
where
    T: Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_hasher(Default::default())
    }
}

impl<T> Default for Graph<T>
where
    T: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> Graph<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            hasher,
            index: HashTable::new(),
            nodes: SlotMap::with_key(),
            order: Vec::new(),
            edge_count: 0,
            reentrancy: DebugReentrancy::new(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns false when the node already exists.
    pub fn insert_node(&mut self, value: T) -> bool {
        self.key_or_insert(value).1
    }

    /// Adds `from -> to`, creating either endpoint if missing. Returns false
    /// when the edge already exists.
    pub fn insert_edge(&mut self, from: T, to: T) -> bool {
        let (from, _) = self.key_or_insert(from);
        let (to, _) = self.key_or_insert(to);
        let Some(node) = self.nodes.get_mut(from) else {
            return false;
        };
        if node.successors.contains(&to) {
            return false;
        }
        node.successors.push(to);
        self.edge_count += 1;
        true
    }

    /// Removes the node with all of its outgoing and incoming edges.
    pub fn remove_node<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let Some(key) = self.node_key(value) else {
            return false;
        };
        let _g = self.reentrancy.enter();
        let Some(node) = self.nodes.remove(key) else {
            return false;
        };
        if let Ok(entry) = self.index.find_entry(node.hash, |&k| k == key) {
            entry.remove();
        }
        self.order.retain(|&k| k != key);

        let outgoing = node.successors.len();
        let mut incoming = 0;
        for (_, other) in self.nodes.iter_mut() {
            let before = other.successors.len();
            other.successors.retain(|&k| k != key);
            incoming += before - other.successors.len();
        }
        // A self-edge sits in `outgoing` only; the node is gone from the map.
        self.edge_count -= outgoing + incoming;
        debug!(
            "removed graph node with {} outgoing and {} incoming edges",
            outgoing, incoming
        );
        true
    }

    pub fn remove_edge<Q>(&mut self, from: &Q, to: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let (Some(from), Some(to)) = (self.node_key(from), self.node_key(to)) else {
            return false;
        };
        let Some(node) = self.nodes.get_mut(from) else {
            return false;
        };
        match node.successors.iter().position(|&k| k == to) {
            Some(pos) => {
                node.successors.remove(pos);
                self.edge_count -= 1;
                true
            }
            None => false,
        }
    }

    pub fn contains_node<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.node_key(value).is_some()
    }

    pub fn contains_edge<Q>(&self, from: &Q, to: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match (self.node_key(from), self.node_key(to)) {
            (Some(from), Some(to)) => self.successor_keys(from).contains(&to),
            _ => false,
        }
    }

    /// Direct successors of `value` in edge insertion order; empty when the
    /// node is unknown.
    pub fn successors<Q>(&self, value: &Q) -> Vec<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.node_key(value) {
            Some(key) => self
                .successor_keys(key)
                .iter()
                .filter_map(|&k| self.value_of(k))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Node values in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &T> + '_ {
        self.order.iter().filter_map(|&k| self.value_of(k))
    }

    /// Every edge as `(from, to)`, grouped by source in node order.
    pub fn edges(&self) -> impl Iterator<Item = (&T, &T)> + '_ {
        self.order.iter().flat_map(move |&from| {
            let from_value = self.value_of(from);
            self.successor_keys(from)
                .iter()
                .filter_map(move |&to| Some((from_value?, self.value_of(to)?)))
        })
    }

    pub(crate) fn node_key<Q>(&self, value: &Q) -> Option<NodeKey>
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _g = self.reentrancy.enter();
        let hash = self.hasher.hash_one(value);
        self.index
            .find(hash, |&k| {
                self.nodes
                    .get(k)
                    .map(|n| n.value.borrow() == value)
                    .unwrap_or(false)
            })
            .copied()
    }

    pub(crate) fn successor_keys(&self, key: NodeKey) -> &[NodeKey] {
        self.nodes
            .get(key)
            .map(|n| n.successors.as_slice())
            .unwrap_or(&[])
    }

    pub(crate) fn value_of(&self, key: NodeKey) -> Option<&T> {
        self.nodes.get(key).map(|n| &n.value)
    }

    fn key_or_insert(&mut self, value: T) -> (NodeKey, bool) {
        let _g = self.reentrancy.enter();
        let hash = self.hasher.hash_one(&value);
        match self.index.entry(
            hash,
            |&k| self.nodes.get(k).map(|n| n.value == value).unwrap_or(false),
            |&k| self.nodes.get(k).map(|n| n.hash).unwrap_or(0),
        ) {
            Entry::Occupied(o) => (*o.get(), false),
            Entry::Vacant(v) => {
                let key = self.nodes.insert(Node {
                    value,
                    hash,
                    successors: Vec::new(),
                });
                let _ = v.insert(key);
                self.order.push(key);
                (key, true)
            }
        }
    }
}

impl<T, S> fmt::Display for Graph<T, S>
where
    T: Eq + Hash + fmt::Display,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("nodes: ")?;
        crate::write_list(f, self.nodes())?;
        f.write_str(", edges: [")?;
        for (i, (from, to)) in self.edges().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "<{from} -> {to}>")?;
        }
        f.write_str("]")
    }
}

impl<T, S> fmt::Debug for Graph<T, S>
where
    T: Eq + Hash + fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("nodes", &self.nodes().collect::<Vec<_>>())
            .field("edges", &self.edges().collect::<Vec<_>>())
            .finish()
    }
}
