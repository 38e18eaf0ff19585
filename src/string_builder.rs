//! StringBuilder: a char buffer that doubles when full.

use core::fmt;
use log::trace;

const RESIZE_FACTOR: usize = 2;

#[derive(Clone, Default)]
pub struct StringBuilder {
    chars: Vec<char>,
    capacity: usize,
}

impl StringBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_char(&mut self, c: char) -> &mut Self {
        if self.chars.len() == self.capacity {
            let doubled = self.capacity * RESIZE_FACTOR;
            self.grow_to(doubled.max(1));
        }
        self.chars.push(c);
        self
    }

    /// Appends every char of `s`. If that overflows the buffer it grows
    /// straight to twice the resulting length.
    pub fn append_str(&mut self, s: &str) -> &mut Self {
        let needed = self.chars.len() + s.chars().count();
        if needed > self.capacity {
            self.grow_to(needed * RESIZE_FACTOR);
        }
        self.chars.extend(s.chars());
        self
    }

    /// Char index of the first `c`.
    pub fn index_of(&self, c: char) -> Option<usize> {
        self.chars.iter().position(|&x| x == c)
    }

    pub fn contains(&self, c: char) -> bool {
        self.index_of(c).is_some()
    }

    /// Length in chars.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn grow_to(&mut self, new_capacity: usize) {
        trace!("growing string builder from {} to {}", self.capacity, new_capacity);
        self.chars.reserve_exact(new_capacity - self.chars.len());
        self.capacity = new_capacity;
    }
}

impl fmt::Display for StringBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            fmt::Write::write_char(f, *c)?;
        }
        Ok(())
    }
}

impl fmt::Debug for StringBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.to_string(), f)
    }
}

impl From<&str> for StringBuilder {
    fn from(s: &str) -> Self {
        let mut b = Self::new();
        b.append_str(s);
        b
    }
}
