//! DynamicArray: a growable array with an explicit growth policy.
//!
//! The logical capacity is tracked separately from the backing `Vec` so the
//! growth schedule is the one configured here (start at `initial_capacity`,
//! jump to 1 from empty, then multiply by `resize_factor`), not whatever the
//! allocator rounds up to.

use crate::error::{Error, Result};
use crate::write_list;
use core::fmt;
use log::trace;

pub struct DynamicArray<T> {
    items: Vec<T>,
    capacity: usize,
    resize_factor: usize,
}

impl<T> DynamicArray<T> {
    pub const DEFAULT_RESIZE_FACTOR: usize = 2;

    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            capacity: 0,
            resize_factor: Self::DEFAULT_RESIZE_FACTOR,
        }
    }

    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(initial_capacity),
            capacity: initial_capacity,
            resize_factor: Self::DEFAULT_RESIZE_FACTOR,
        }
    }

    /// Fails with `InvalidArgument` when `resize_factor < 2`, which would
    /// stop the array from ever growing.
    pub fn with_capacity_and_factor(initial_capacity: usize, resize_factor: usize) -> Result<Self> {
        if resize_factor < 2 {
            return Err(Error::invalid(format!(
                "resize factor must be at least 2, got {resize_factor}"
            )));
        }
        Ok(Self {
            items: Vec::with_capacity(initial_capacity),
            capacity: initial_capacity,
            resize_factor,
        })
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

    pub fn push(&mut self, value: T) {
        if self.items.len() == self.capacity {
            self.grow();
        }
        self.items.push(value);
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Removes the element at `index`, shifting the tail left.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        if index >= self.items.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    fn grow(&mut self) {
        let new_capacity = if self.capacity == 0 {
            1
        } else {
            self.capacity.saturating_mul(self.resize_factor)
        };
        trace!("growing dynamic array from {} to {}", self.capacity, new_capacity);
        self.items.reserve_exact(new_capacity - self.items.len());
        self.capacity = new_capacity;
    }
}

impl<T: PartialEq> DynamicArray<T> {
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.items.iter().position(|v| v == value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Removes the first element equal to `value`; later elements shift
    /// down by one.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let index = self.index_of(value)?;
        Some(self.items.remove(index))
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend(self.items.iter().cloned());
        Self {
            items,
            capacity: self.capacity,
            resize_factor: self.resize_factor,
        }
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.push(v);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut a = Self::new();
        a.extend(iter);
        a
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, &self.items)
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}
