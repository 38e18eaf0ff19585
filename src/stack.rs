//! LIFO stack over `DoublyLinkedList`; the top is the list head.

use crate::doubly_linked_list::DoublyLinkedList;
use core::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: DoublyLinkedList<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            items: DoublyLinkedList::new(),
        }
    }

    pub fn push(&mut self, value: T) {
        self.items.push_front(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Top to bottom.
    pub fn iter(&self) -> crate::doubly_linked_list::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: PartialEq> Stack<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.push(v);
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut s = Self::new();
        s.extend(iter);
        s
    }
}

/// Renders bottom to top, so the last element shown is the next to pop.
impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.items.reversed(), f)
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter().rev()).finish()
    }
}
