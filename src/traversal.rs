//! Searches over sorted slices, binary trees and graphs.

use crate::binary_search_tree::TreeNode;
use crate::graph::{Graph, NodeKey};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use hashbrown::HashSet;
use log::debug;
use std::collections::VecDeque;

/// Recursive binary search. The probe is the upper middle of the range, so
/// a two-element range checks its second element first.
pub fn binary_search<T: Ord>(sorted: &[T], value: &T) -> bool {
    if sorted.is_empty() {
        return false;
    }
    let mid = sorted.len() / 2;
    match sorted[mid].cmp(value) {
        Ordering::Equal => true,
        Ordering::Greater => binary_search(&sorted[..mid], value),
        Ordering::Less => binary_search(&sorted[mid + 1..], value),
    }
}

pub fn in_order<T>(root: &TreeNode<T>) -> Vec<&T> {
    fn walk<'a, T>(node: Option<&'a TreeNode<T>>, out: &mut Vec<&'a T>) {
        if let Some(n) = node {
            walk(n.left(), out);
            out.push(n.value());
            walk(n.right(), out);
        }
    }
    let mut out = Vec::new();
    walk(Some(root), &mut out);
    out
}

pub fn pre_order<T>(root: &TreeNode<T>) -> Vec<&T> {
    fn walk<'a, T>(node: Option<&'a TreeNode<T>>, out: &mut Vec<&'a T>) {
        if let Some(n) = node {
            out.push(n.value());
            walk(n.left(), out);
            walk(n.right(), out);
        }
    }
    let mut out = Vec::new();
    walk(Some(root), &mut out);
    out
}

pub fn post_order<T>(root: &TreeNode<T>) -> Vec<&T> {
    fn walk<'a, T>(node: Option<&'a TreeNode<T>>, out: &mut Vec<&'a T>) {
        if let Some(n) = node {
            walk(n.left(), out);
            walk(n.right(), out);
            out.push(n.value());
        }
    }
    let mut out = Vec::new();
    walk(Some(root), &mut out);
    out
}

/// Resolves both endpoints, applying the rules shared by both searches: a
/// missing endpoint means no path, and a node only reaches itself through a
/// self-edge.
fn endpoints<T, S>(graph: &Graph<T, S>, start: &T, end: &T) -> Option<(NodeKey, NodeKey)>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    let from = graph.node_key(start)?;
    let to = graph.node_key(end)?;
    if from == to && !graph.successor_keys(from).contains(&to) {
        return None;
    }
    Some((from, to))
}

fn log_visit<T: fmt::Debug, S>(kind: &str, graph: &Graph<T, S>, key: NodeKey)
where
    T: Eq + Hash,
    S: BuildHasher,
{
    if let Some(value) = graph.value_of(key) {
        debug!("{kind} visiting node {value:?}");
    }
}

/// Breadth-first reachability from `start` to `end`.
pub fn bfs_path_exists<T, S>(graph: &Graph<T, S>, start: &T, end: &T) -> bool
where
    T: Eq + Hash + fmt::Debug,
    S: BuildHasher,
{
    let Some((from, to)) = endpoints(graph, start, end) else {
        return false;
    };
    let mut visited = HashSet::new();
    let mut pending = VecDeque::from([from]);
    while let Some(key) = pending.pop_front() {
        if !visited.insert(key) {
            continue;
        }
        log_visit("bfs", graph, key);
        if key == to {
            return true;
        }
        pending.extend(
            graph
                .successor_keys(key)
                .iter()
                .filter(|k| !visited.contains(*k)),
        );
    }
    false
}

/// Depth-first reachability from `start` to `end`, using an explicit stack.
pub fn dfs_path_exists<T, S>(graph: &Graph<T, S>, start: &T, end: &T) -> bool
where
    T: Eq + Hash + fmt::Debug,
    S: BuildHasher,
{
    let Some((from, to)) = endpoints(graph, start, end) else {
        return false;
    };
    let mut visited = HashSet::new();
    let mut pending = vec![from];
    while let Some(key) = pending.pop() {
        if !visited.insert(key) {
            continue;
        }
        log_visit("dfs", graph, key);
        if key == to {
            return true;
        }
        pending.extend(
            graph
                .successor_keys(key)
                .iter()
                .filter(|k| !visited.contains(*k)),
        );
    }
    false
}
