//! MultiStack: N stacks interleaved in one backing array.
//!
//! Stack `s` (numbered from 1) keeps its `i`th element at
//! `i * N + (s - 1)`, so every stack has the same number of slots and the
//! whole array grows as soon as any one of them runs out.

use crate::error::{Error, Result};
use core::fmt;
use log::debug;

const RESIZE_FACTOR: usize = 2;

#[derive(Clone, PartialEq, Eq)]
pub struct MultiStack<T> {
    slots: Vec<Option<T>>,
    sizes: Vec<usize>,
}

impl<T> MultiStack<T> {
    /// `stack_count` must be at least 1.
    pub fn new(stack_count: usize) -> Result<Self> {
        if stack_count == 0 {
            return Err(Error::invalid("a multi-stack needs at least one stack"));
        }
        Ok(Self {
            slots: Vec::new(),
            sizes: vec![0; stack_count],
        })
    }

    pub fn stack_count(&self) -> usize {
        self.sizes.len()
    }

    /// Total slots across all stacks.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn push(&mut self, stack: usize, value: T) -> Result<()> {
        let idx = self.stack_index(stack)?;
        if self.any_stack_full() {
            self.grow();
        }
        let size = self.sizes[idx];
        let slot = self.slot(size, idx);
        self.slots[slot] = Some(value);
        self.sizes[idx] = size + 1;
        Ok(())
    }

    pub fn pop(&mut self, stack: usize) -> Result<Option<T>> {
        let idx = self.stack_index(stack)?;
        let size = self.sizes[idx];
        if size == 0 {
            return Ok(None);
        }
        let slot = self.slot(size - 1, idx);
        self.sizes[idx] = size - 1;
        Ok(self.slots[slot].take())
    }

    pub fn peek(&self, stack: usize) -> Result<Option<&T>> {
        let idx = self.stack_index(stack)?;
        let size = self.sizes[idx];
        if size == 0 {
            return Ok(None);
        }
        Ok(self.slots[self.slot(size - 1, idx)].as_ref())
    }

    pub fn stack_len(&self, stack: usize) -> Result<usize> {
        Ok(self.sizes[self.stack_index(stack)?])
    }

    /// Elements of one stack, bottom to top.
    pub fn iter_stack(&self, stack: usize) -> Result<impl Iterator<Item = &T> + '_> {
        let idx = self.stack_index(stack)?;
        let n = self.stack_count();
        Ok((0..self.sizes[idx]).filter_map(move |i| self.slots[i * n + idx].as_ref()))
    }

    fn stack_index(&self, stack: usize) -> Result<usize> {
        if stack == 0 || stack > self.stack_count() {
            return Err(Error::invalid(format!(
                "stack number {stack} outside 1..={}",
                self.stack_count()
            )));
        }
        Ok(stack - 1)
    }

    fn slot(&self, position: usize, idx: usize) -> usize {
        position * self.stack_count() + idx
    }

    fn any_stack_full(&self) -> bool {
        let per_stack = self.slots.len() / self.stack_count();
        self.sizes.iter().any(|&size| size == per_stack)
    }

    fn grow(&mut self) {
        let new_len = if self.slots.is_empty() {
            self.stack_count()
        } else {
            self.slots.len() * RESIZE_FACTOR
        };
        debug!("growing multi-stack storage from {} to {}", self.slots.len(), new_len);
        self.slots.resize_with(new_len, || None);
    }
}

impl<T: PartialEq> MultiStack<T> {
    pub fn contains(&self, stack: usize, value: &T) -> Result<bool> {
        Ok(self.iter_stack(stack)?.any(|v| v == value))
    }
}

impl<T: fmt::Display> MultiStack<T> {
    /// `[bottom, ..., top]` for one stack.
    pub fn stack_to_string(&self, stack: usize) -> Result<String> {
        let items: Vec<String> = self.iter_stack(stack)?.map(ToString::to_string).collect();
        Ok(format!("[{}]", items.join(", ")))
    }
}

impl<T: fmt::Debug> fmt::Debug for MultiStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiStack")
            .field("sizes", &self.sizes)
            .field("slots", &self.slots)
            .finish()
    }
}
