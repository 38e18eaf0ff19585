//! Linked-list problems solved with runner pointers.

use crate::error::{Error, Result};
use crate::singly_linked_list::SinglyLinkedList;

/// Drops every repeat of a value, keeping its first occurrence. Uses no
/// extra storage: for each node a runner walks the rest of the list and
/// unlinks equal nodes, so the cost is O(n^2) time and O(1) space.
pub fn remove_duplicates<T: PartialEq>(list: &mut SinglyLinkedList<T>) {
    let mut removed = 0;
    let mut current = list.head.as_deref_mut();
    while let Some(node) = current {
        let mut runner = &mut node.next;
        while runner.is_some() {
            if runner.as_ref().is_some_and(|r| r.value == node.value) {
                let next = runner.as_mut().and_then(|r| r.next.take());
                *runner = next;
                removed += 1;
            } else if let Some(r) = runner {
                runner = &mut r.next;
            }
        }
        current = node.next.as_deref_mut();
    }
    list.len -= removed;
}

/// The `k`th element counted from the tail, where `k = 1` is the last
/// element (`k = 0` is treated as 1). A runner is sent `k` nodes ahead, then
/// both pointers advance until the runner falls off the end.
pub fn kth_to_last<T>(list: &SinglyLinkedList<T>, k: usize) -> Result<&T> {
    let too_far = || Error::invalid(format!("k = {k} exceeds list length {}", list.len()));
    let mut runner = list.head.as_deref();
    for _ in 0..k.max(1) {
        runner = runner.ok_or_else(too_far)?.next.as_deref();
    }
    let mut current = list.head.as_deref();
    while let Some(r) = runner {
        runner = r.next.as_deref();
        current = current.and_then(|c| c.next.as_deref());
    }
    current.map(|c| &c.value).ok_or_else(too_far)
}
