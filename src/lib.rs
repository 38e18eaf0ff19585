//! textbook-dsa: classic data structures and algorithms written from
//! scratch, with a chained hash table as the centrepiece.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: one self-contained, independently testable module per
//!   structure or algorithm family, each exposing a small std-like API.
//! - Centrepiece:
//!   - ChainedHashTable<K, V, S>: separate chaining over a `Vec` of
//!     `Vec` chains, cached per-entry hashes, and a load-factor driven
//!     resize that re-homes every entry in one pass.
//! - Sequences: DynamicArray, StringBuilder, SinglyLinkedList,
//!   DoublyLinkedList, with Stack and Queue delegating to the doubly
//!   linked list; MultiStack and TwoStackQueue as array/stack exercises.
//! - Trees and graphs: BinarySearchTree, MinHeap, PrefixTree, Graph.
//! - Algorithms: `sorting`, `traversal`, and the worked `problems`.
//!
//! Constraints
//! - Single-threaded; no structure synchronizes internally.
//! - Safe Rust only. Linked structures either own their nodes through
//!   `Box` (singly linked list, BST, trie) or live in a `slotmap` arena
//!   addressed by generational keys (doubly linked list, graph).
//! - Absent values are `Option`s. `Error` is reserved for calls rejected
//!   at the API boundary, before any state changes.
//!
//! Hash table invariants
//! - `capacity == buckets.len()` and every entry sits in bucket
//!   `cached_hash % capacity`.
//! - `len` equals the sum of chain lengths.
//! - An insert first checks `len / capacity >= load_factor_limit`; if so
//!   the bucket array grows by `resize_factor` before the new entry lands.
//! - `K: Hash` runs once per insert. Resizing reuses the cached hash and
//!   never calls back into user code.
//!
//! Reentrancy policy
//! - The hash table and the graph hold a debug-only reentrancy guard while
//!   they probe. User `Hash`/`Eq` impls that call back into the same
//!   structure panic in debug builds; release builds compile the guard
//!   away.
//!
//! Logging
//! - Structural events (resizes, growth, graph node removal, search
//!   visits) go through the `log` facade at `debug`/`trace` level. The
//!   crate installs no logger.

mod reentrancy;
#[cfg(test)]
mod test_support;

pub mod binary_search_tree;
pub mod doubly_linked_list;
pub mod dynamic_array;
pub mod error;
pub mod graph;
pub mod hash_table;
mod hash_table_proptest;
pub mod min_heap;
pub mod multi_stack;
pub mod problems;
pub mod queue;
pub mod singly_linked_list;
pub mod sorting;
pub mod stack;
pub mod string_builder;
pub mod traversal;
pub mod trie;
pub mod two_stack_queue;

// Public surface
pub use binary_search_tree::{BinarySearchTree, TreeNode};
pub use doubly_linked_list::DoublyLinkedList;
pub use dynamic_array::DynamicArray;
pub use error::{Error, Result};
pub use graph::Graph;
pub use hash_table::{ChainedHashTable, DuplicatePolicy, TableConfig};
pub use min_heap::MinHeap;
pub use multi_stack::MultiStack;
pub use queue::Queue;
pub use singly_linked_list::SinglyLinkedList;
pub use stack::Stack;
pub use string_builder::StringBuilder;
pub use trie::PrefixTree;
pub use two_stack_queue::TwoStackQueue;

use core::fmt;

/// Writes `[a, b, c]` (or `[]`) using each item's `Display`.
pub(crate) fn write_list<'a, T, I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    f.write_str("[")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str("]")
}
