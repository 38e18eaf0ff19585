//! MinHeap: an array-backed binary min-heap.
//!
//! Children of index `i` sit at `2i + 1` and `2i + 2`. The backing storage
//! follows the same 0, 1, 2, 4, ... growth schedule as `DynamicArray`.

use crate::write_list;
use core::cmp::Ordering;
use core::fmt;
use log::trace;
use std::collections::VecDeque;

const RESIZE_FACTOR: usize = 2;

#[derive(Clone)]
pub struct MinHeap<T> {
    items: Vec<T>,
    capacity: usize,
}

fn parent(i: usize) -> usize {
    (i - 1) / 2
}

fn children(i: usize) -> (usize, usize) {
    (2 * i + 1, 2 * i + 2)
}

impl<T: Ord> MinHeap<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            capacity: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn insert(&mut self, value: T) {
        if self.items.len() == self.capacity {
            let new_capacity = (self.capacity * RESIZE_FACTOR).max(1);
            trace!("growing min-heap from {} to {}", self.capacity, new_capacity);
            self.items.reserve_exact(new_capacity - self.items.len());
            self.capacity = new_capacity;
        }
        self.items.push(value);
        self.sift_up(self.items.len() - 1);
    }

    /// Removes the minimum. The last element takes the root's place and
    /// sinks toward the smaller child until both children are larger.
    pub fn extract(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let min = self.items.swap_remove(0);
        self.sift_down(0);
        Some(min)
    }

    /// Level-order search that skips every sub-heap whose root is already
    /// larger than `value`.
    pub fn contains(&self, value: &T) -> bool {
        let mut pending = VecDeque::new();
        if !self.items.is_empty() {
            pending.push_back(0);
        }
        while let Some(i) = pending.pop_front() {
            match value.cmp(&self.items[i]) {
                Ordering::Equal => return true,
                Ordering::Less => {}
                Ordering::Greater => {
                    let (l, r) = children(i);
                    pending.extend([l, r].into_iter().filter(|&c| c < self.items.len()));
                }
            }
        }
        false
    }

    /// Elements in storage order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = parent(i);
            if self.items[i] >= self.items[p] {
                break;
            }
            self.items.swap(i, p);
            i = p;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.items.len();
        loop {
            let (l, r) = children(i);
            let smaller = match (l < len, r < len) {
                (false, _) => break,
                (true, false) => l,
                (true, true) if self.items[r] < self.items[l] => r,
                (true, true) => l,
            };
            if self.items[smaller] >= self.items[i] {
                break;
            }
            self.items.swap(i, smaller);
            i = smaller;
        }
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<T: fmt::Display> fmt::Display for MinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, &self.items)
    }
}

impl<T: fmt::Debug> fmt::Debug for MinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}
