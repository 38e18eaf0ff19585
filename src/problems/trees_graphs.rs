//! Tree and graph construction/search problems.

use crate::binary_search_tree::TreeNode;
use std::collections::VecDeque;

/// Breadth-first search over an adjacency list where `adjacency[i]` holds the
/// successors of node `i`. Each node is expanded at most once. Endpoints
/// outside the list never connect.
pub fn route_exists(adjacency: &[Vec<usize>], start: usize, end: usize) -> bool {
    if start >= adjacency.len() || end >= adjacency.len() {
        return false;
    }
    let mut visited = vec![false; adjacency.len()];
    let mut pending = VecDeque::from([start]);
    visited[start] = true;
    while let Some(node) = pending.pop_front() {
        if node == end {
            return true;
        }
        for &next in &adjacency[node] {
            if next < visited.len() && !visited[next] {
                visited[next] = true;
                pending.push_back(next);
            }
        }
    }
    false
}

/// Builds a minimal-height BST from ascending `sorted` by rooting each
/// subtree at the upper median of its range.
pub fn minimal_bst<T: Clone>(sorted: &[T]) -> Option<Box<TreeNode<T>>> {
    if sorted.is_empty() {
        return None;
    }
    let mid = sorted.len() / 2;
    Some(Box::new(TreeNode {
        value: sorted[mid].clone(),
        left: minimal_bst(&sorted[..mid]),
        right: minimal_bst(&sorted[mid + 1..]),
    }))
}
