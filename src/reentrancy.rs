//! Debug-only reentrancy detection.
//!
//! The hash table and the graph call back into user code (`K: Hash`,
//! `K: Eq`) while a probe is in flight. If that code reaches the same
//! structure again, debug builds panic instead of observing a half-updated
//! bucket array. Release builds compile the guard away.

use core::cell::Cell;
use core::marker::PhantomData;

/// Per-structure tracker. Public entry points take
/// `let _g = self.reentrancy.enter();` before touching internals.
#[derive(Debug)]
pub(crate) struct DebugReentrancy {
    #[cfg(debug_assertions)]
    busy: Cell<bool>,
    // Single-threaded structures only.
    _not_send: PhantomData<*mut ()>,
}

impl DebugReentrancy {
    pub(crate) const fn new() -> Self {
        Self {
            #[cfg(debug_assertions)]
            busy: Cell::new(false),
            _not_send: PhantomData,
        }
    }

    /// Marks the owner busy until the returned guard drops. Panics in debug
    /// builds if the owner is already busy.
    #[inline]
    pub(crate) fn enter(&self) -> Guard<'_> {
        #[cfg(debug_assertions)]
        {
            assert!(
                !self.busy.replace(true),
                "reentrant call into a structure that is mid-operation"
            );
            Guard { owner: self }
        }

        #[cfg(not(debug_assertions))]
        {
            Guard { _z: PhantomData }
        }
    }
}

impl Default for DebugReentrancy {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for DebugReentrancy {
    // A clone is a fresh structure with nothing in flight.
    fn clone(&self) -> Self {
        Self::new()
    }
}

pub(crate) struct Guard<'a> {
    #[cfg(debug_assertions)]
    owner: &'a DebugReentrancy,
    #[cfg(not(debug_assertions))]
    _z: PhantomData<&'a ()>,
}

impl Drop for Guard<'_> {
    fn drop(&mut self) {
        #[cfg(debug_assertions)]
        self.owner.busy.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::DebugReentrancy;

    #[test]
    fn sequential_entries_are_fine() {
        let r = DebugReentrancy::new();
        {
            let _g = r.enter();
        }
        let _g = r.enter();
    }

    #[cfg(debug_assertions)]
    #[test]
    fn nested_entry_panics_in_debug() {
        let r = DebugReentrancy::new();
        let res = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _outer = r.enter();
            let _inner = r.enter();
        }));
        assert!(res.is_err(), "nested entry must panic in debug builds");
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn nested_entry_is_noop_in_release() {
        let r = DebugReentrancy::new();
        let _outer = r.enter();
        let _inner = r.enter();
    }
}
