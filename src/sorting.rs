//! In-place comparison sorts over slices.

/// Repeatedly swaps adjacent out-of-order pairs; each pass settles the
/// largest remaining element at the end.
pub fn bubble_sort<T: Ord>(items: &mut [T]) {
    let len = items.len();
    for pass in 0..len {
        let last = len - pass - 1;
        for i in 0..last {
            if items[i] > items[i + 1] {
                items.swap(i, i + 1);
            }
        }
    }
}

/// Each pass finds the largest element of the unsorted prefix and swaps it
/// to the end of that prefix.
pub fn selection_sort<T: Ord>(items: &mut [T]) {
    for end in (1..items.len()).rev() {
        let mut largest = 0;
        for i in 1..=end {
            if items[largest] < items[i] {
                largest = i;
            }
        }
        if largest != end {
            items.swap(largest, end);
        }
    }
}

/// Top-down merge sort with a single helper buffer the size of the input.
/// Stable: on ties the element from the left half goes first.
pub fn merge_sort<T: Ord + Clone>(items: &mut [T]) {
    let mut helper = items.to_vec();
    merge_sort_into(items, &mut helper);
}

fn merge_sort_into<T: Ord + Clone>(items: &mut [T], helper: &mut [T]) {
    if items.len() < 2 {
        return;
    }
    let mid = (items.len() - 1) / 2 + 1;
    {
        let (left, right) = items.split_at_mut(mid);
        let (left_helper, right_helper) = helper.split_at_mut(mid);
        merge_sort_into(left, left_helper);
        merge_sort_into(right, right_helper);
    }
    merge(items, helper, mid);
}

fn merge<T: Ord + Clone>(items: &mut [T], helper: &mut [T], mid: usize) {
    helper.clone_from_slice(items);
    let (mut left, mut right, mut out) = (0, mid, 0);
    while left < mid && right < items.len() {
        if helper[left] > helper[right] {
            items[out] = helper[right].clone();
            right += 1;
        } else {
            items[out] = helper[left].clone();
            left += 1;
        }
        out += 1;
    }
    // Leftovers from the right half are already in place.
    while left < mid {
        items[out] = helper[left].clone();
        left += 1;
        out += 1;
    }
}

/// Quicksort with the middle element as pivot and Hoare partitioning.
pub fn quick_sort<T: Ord>(items: &mut [T]) {
    if items.len() < 2 {
        return;
    }
    let split = partition(items);
    let (left, right) = items.split_at_mut(split);
    quick_sort(left);
    quick_sort(right);
}

// Returns the index where the right partition starts. Everything before it
// is <= the pivot, everything from it on is >= the pivot. The pivot is
// tracked by position because swaps may move it.
fn partition<T: Ord>(items: &mut [T]) -> usize {
    let mut pivot = (items.len() - 1) / 2;
    let (mut left, mut right) = (0, items.len() - 1);
    while left <= right {
        while items[left] < items[pivot] {
            left += 1;
        }
        while items[right] > items[pivot] {
            right -= 1;
        }
        if left <= right {
            items.swap(left, right);
            if pivot == left {
                pivot = right;
            } else if pivot == right {
                pivot = left;
            }
            left += 1;
            if right == 0 {
                break;
            }
            right -= 1;
        }
    }
    left
}
