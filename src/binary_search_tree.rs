//! BinarySearchTree: an unbalanced BST that keeps duplicates.
//!
//! Values that compare less than or equal to a node go to its left subtree,
//! so the tree holds every inserted value and `len` always grows on insert.

use crate::write_list;
use core::cmp::Ordering;
use core::fmt;

pub(crate) type Link<T> = Option<Box<TreeNode<T>>>;

/// A binary tree node. Also the input type of the tree traversals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeNode<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> TreeNode<T> {
    pub fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn with_children(value: T, left: Option<TreeNode<T>>, right: Option<TreeNode<T>>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn left(&self) -> Option<&TreeNode<T>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&TreeNode<T>> {
        self.right.as_deref()
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let l = self.left().map_or(0, TreeNode::height);
        let r = self.right().map_or(0, TreeNode::height);
        1 + l.max(r)
    }
}

pub struct BinarySearchTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T: Ord> BinarySearchTree<T> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<&TreeNode<T>> {
        self.root.as_deref()
    }

    pub fn insert(&mut self, value: T) {
        let mut cur = &mut self.root;
        while let Some(node) = cur {
            cur = if value <= node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *cur = Some(Box::new(TreeNode::leaf(value)));
        self.len += 1;
    }

    /// Removes one node equal to `value`. A node with two children is
    /// replaced by its in-order successor.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let mut cur = &mut self.root;
        loop {
            let ord = value.cmp(&cur.as_deref()?.value);
            match ord {
                Ordering::Equal => break,
                Ordering::Less => cur = &mut cur.as_mut()?.left,
                Ordering::Greater => cur = &mut cur.as_mut()?.right,
            }
        }

        let TreeNode {
            value: removed,
            left,
            right,
        } = *cur.take()?;
        *cur = match (left, right) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let mut right = Some(right);
                Self::take_min(&mut right).map(|successor| {
                    Box::new(TreeNode {
                        value: successor,
                        left: Some(left),
                        right,
                    })
                })
            }
        };
        self.len -= 1;
        Some(removed)
    }

    pub fn contains(&self, value: &T) -> bool {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            cur = match value.cmp(&node.value) {
                Ordering::Equal => return true,
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
            };
        }
        false
    }

    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(&node.value)
    }

    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(&node.value)
    }

    /// Detaches the leftmost node under `link`, splicing its right child
    /// into its place. Iterative; the left spine can be as long as the tree.
    fn take_min(link: &mut Link<T>) -> Option<T> {
        let mut cur = link;
        while cur.as_ref().is_some_and(|n| n.left.is_some()) {
            cur = &mut cur.as_mut()?.left;
        }
        let TreeNode { value, right, .. } = *cur.take()?;
        *cur = right;
        Some(value)
    }
}

impl<T> BinarySearchTree<T> {
    /// In-order (sorted) iteration.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut it = Iter { stack: Vec::new() };
        it.push_left(self.root.as_deref());
        it
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Degenerate (list-shaped) trees are as deep as they are long.
impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        let mut pending: Vec<Box<TreeNode<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

pub struct Iter<'a, T> {
    stack: Vec<&'a TreeNode<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn push_left(&mut self, mut node: Option<&'a TreeNode<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right());
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
