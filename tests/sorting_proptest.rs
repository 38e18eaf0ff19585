use proptest::prelude::*;
use std::collections::BinaryHeap;
use std::cmp::Reverse;
use textbook_dsa::sorting::{bubble_sort, merge_sort, quick_sort, selection_sort};
use textbook_dsa::traversal::binary_search;
use textbook_dsa::{BinarySearchTree, MinHeap};

// Every sort must agree with slice::sort on arbitrary input, duplicates and
// already-sorted runs included.
proptest! {
    #[test]
    fn prop_sorts_match_std(mut v in proptest::collection::vec(-50i32..50, 0..200)) {
        let mut expected = v.clone();
        expected.sort();

        let mut b = v.clone();
        bubble_sort(&mut b);
        prop_assert_eq!(&b, &expected);

        let mut s = v.clone();
        selection_sort(&mut s);
        prop_assert_eq!(&s, &expected);

        let mut m = v.clone();
        merge_sort(&mut m);
        prop_assert_eq!(&m, &expected);

        quick_sort(&mut v);
        prop_assert_eq!(&v, &expected);
    }

    // Stability: merge sort keeps equal keys in input order, exactly like
    // the stable std sort.
    #[test]
    fn prop_merge_sort_is_stable(keys in proptest::collection::vec(0u8..5, 0..100)) {
        #[derive(Clone, Debug, PartialEq, Eq)]
        struct Tagged(u8, usize);
        impl PartialOrd for Tagged {
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Tagged {
            fn cmp(&self, other: &Self) -> core::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }

        let mut ours: Vec<Tagged> = keys.iter().enumerate().map(|(i, &k)| Tagged(k, i)).collect();
        let mut theirs = ours.clone();
        merge_sort(&mut ours);
        theirs.sort();
        let ours: Vec<(u8, usize)> = ours.into_iter().map(|t| (t.0, t.1)).collect();
        let theirs: Vec<(u8, usize)> = theirs.into_iter().map(|t| (t.0, t.1)).collect();
        prop_assert_eq!(ours, theirs);
    }

    // Membership through binary search equals a linear scan.
    #[test]
    fn prop_binary_search_matches_contains(
        mut v in proptest::collection::vec(0u16..500, 0..100),
        target in 0u16..500,
    ) {
        v.sort();
        prop_assert_eq!(binary_search(&v, &target), v.contains(&target));
    }

    // MinHeap against std's max-heap over Reverse, with interleaved extracts.
    #[test]
    fn prop_min_heap_matches_binary_heap(ops in proptest::collection::vec(proptest::option::of(any::<i16>()), 0..150)) {
        let mut ours = MinHeap::new();
        let mut model = BinaryHeap::new();
        for op in ops {
            match op {
                Some(v) => {
                    ours.insert(v);
                    model.push(Reverse(v));
                }
                None => {
                    prop_assert_eq!(ours.extract(), model.pop().map(|r| r.0));
                }
            }
            prop_assert_eq!(ours.len(), model.len());
            prop_assert_eq!(ours.peek(), model.peek().map(|r| &r.0));
        }
    }

    // The BST's in-order walk is the sorted multiset of what went in, and
    // removing values keeps it that way.
    #[test]
    fn prop_bst_in_order_is_sorted(
        values in proptest::collection::vec(0i32..40, 0..80),
        removals in proptest::collection::vec(0i32..40, 0..40),
    ) {
        let mut tree: BinarySearchTree<i32> = values.iter().copied().collect();
        let mut model = values.clone();
        for r in &removals {
            let expected = model.iter().position(|v| v == r).map(|i| model.remove(i));
            prop_assert_eq!(tree.remove(r), expected);
        }
        model.sort();
        prop_assert_eq!(tree.iter().copied().collect::<Vec<_>>(), model.clone());
        prop_assert_eq!(tree.len(), model.len());
    }
}
