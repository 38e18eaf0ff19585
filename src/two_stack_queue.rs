//! TwoStackQueue: a FIFO made of two LIFO stacks.
//!
//! Elements sit in exactly one of the stacks at a time. Enqueueing wants
//! them all in `inbox` (oldest at the bottom), dequeueing wants them all in
//! `outbox` (oldest on top); each side drains the other on demand.

use crate::write_list;
use core::fmt;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct TwoStackQueue<T> {
    inbox: Vec<T>,
    outbox: Vec<T>,
}

impl<T> TwoStackQueue<T> {
    pub fn new() -> Self {
        Self {
            inbox: Vec::new(),
            outbox: Vec::new(),
        }
    }

    pub fn enqueue(&mut self, value: T) {
        if !self.outbox.is_empty() {
            Self::shift(&mut self.outbox, &mut self.inbox);
        }
        self.inbox.push(value);
    }

    pub fn dequeue(&mut self) -> Option<T> {
        if !self.inbox.is_empty() {
            Self::shift(&mut self.inbox, &mut self.outbox);
        }
        self.outbox.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.outbox.last().or_else(|| self.inbox.first())
    }

    pub fn len(&self) -> usize {
        self.inbox.len() + self.outbox.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inbox.is_empty() && self.outbox.is_empty()
    }

    /// Front to back, whichever stack currently holds the elements.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.outbox.iter().rev().chain(self.inbox.iter())
    }

    fn shift(from: &mut Vec<T>, to: &mut Vec<T>) {
        while let Some(v) = from.pop() {
            to.push(v);
        }
    }
}

impl<T: PartialEq> TwoStackQueue<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.inbox.contains(value) || self.outbox.contains(value)
    }
}

impl<T: fmt::Display> fmt::Display for TwoStackQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for TwoStackQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
