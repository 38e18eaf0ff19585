mod common;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};
use textbook_dsa::{
    BinarySearchTree, DoublyLinkedList, DynamicArray, Graph, MinHeap, PrefixTree, Queue,
    SinglyLinkedList, Stack, TwoStackQueue,
};
use textbook_dsa::traversal::{bfs_path_exists, dfs_path_exists};
use common::{bench_config, lcg};

fn bench_push_100k(c: &mut Criterion) {
    c.bench_function("dynamic_array::push_100k", |b| {
        b.iter(|| {
            let mut a = DynamicArray::new();
            for i in 0..100_000u64 {
                a.push(i);
            }
            black_box(a)
        })
    });
    c.bench_function("vec::push_100k", |b| {
        b.iter(|| {
            let mut v = Vec::new();
            for i in 0..100_000u64 {
                v.push(i);
            }
            black_box(v)
        })
    });
}

fn bench_lists(c: &mut Criterion) {
    c.bench_function("singly::push_front_pop_front_100k", |b| {
        b.iter(|| {
            let mut l = SinglyLinkedList::new();
            for i in 0..100_000u64 {
                l.push_front(i);
            }
            while let Some(v) = l.pop_front() {
                black_box(v);
            }
        })
    });
    c.bench_function("doubly::push_back_pop_front_100k", |b| {
        b.iter(|| {
            let mut l = DoublyLinkedList::new();
            for i in 0..100_000u64 {
                l.push_back(i);
            }
            while let Some(v) = l.pop_front() {
                black_box(v);
            }
        })
    });
    c.bench_function("vecdeque::push_back_pop_front_100k", |b| {
        b.iter(|| {
            let mut d = VecDeque::new();
            for i in 0..100_000u64 {
                d.push_back(i);
            }
            while let Some(v) = d.pop_front() {
                black_box(v);
            }
        })
    });
}

// Interleaved producer/consumer pattern: bursts of 8 in, 5 out.
fn bench_queues(c: &mut Criterion) {
    c.bench_function("queue::bursty_100k", |b| {
        b.iter(|| {
            let mut q = Queue::new();
            for burst in 0..12_500u64 {
                for i in 0..8 {
                    q.enqueue(burst * 8 + i);
                }
                for _ in 0..5 {
                    black_box(q.dequeue());
                }
            }
            black_box(q.len())
        })
    });
    c.bench_function("two_stack_queue::bursty_100k", |b| {
        b.iter(|| {
            let mut q = TwoStackQueue::new();
            for burst in 0..12_500u64 {
                for i in 0..8 {
                    q.enqueue(burst * 8 + i);
                }
                for _ in 0..5 {
                    black_box(q.dequeue());
                }
            }
            black_box(q.len())
        })
    });
    c.bench_function("stack::push_pop_100k", |b| {
        b.iter(|| {
            let mut s = Stack::new();
            for i in 0..100_000u64 {
                s.push(i);
            }
            while let Some(v) = s.pop() {
                black_box(v);
            }
        })
    });
}

fn bench_heaps(c: &mut Criterion) {
    let values: Vec<u64> = lcg(17).take(100_000).collect();
    c.bench_function("min_heap::insert_extract_100k", |b| {
        b.iter(|| {
            let mut h = MinHeap::new();
            for v in &values {
                h.insert(*v);
            }
            while let Some(v) = h.extract() {
                black_box(v);
            }
        })
    });
    c.bench_function("binary_heap::insert_extract_100k", |b| {
        b.iter(|| {
            let mut h = BinaryHeap::new();
            for v in &values {
                h.push(Reverse(*v));
            }
            while let Some(v) = h.pop() {
                black_box(v);
            }
        })
    });
}

fn bench_bst(c: &mut Criterion) {
    let values: Vec<u64> = lcg(19).take(50_000).collect();
    c.bench_function("bst::insert_random_50k", |b| {
        b.iter_batched(
            BinarySearchTree::new,
            |mut t| {
                for v in &values {
                    t.insert(*v);
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
    let tree: BinarySearchTree<u64> = values.iter().copied().collect();
    c.bench_function("bst::contains_random_50k", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for v in &values {
                hits += usize::from(tree.contains(v));
            }
            black_box(hits)
        })
    });
}

fn bench_trie(c: &mut Criterion) {
    let words: Vec<String> = lcg(23)
        .take(20_000)
        .map(|x| format!("{:x}", x % 0xff_ffff))
        .collect();
    let trie: PrefixTree = words.iter().map(String::as_str).collect();
    c.bench_function("trie::contains_word_20k", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for w in &words {
                hits += usize::from(trie.contains_word(w));
            }
            black_box(hits)
        })
    });
    c.bench_function("trie::words_with_prefix_16", |b| {
        b.iter(|| {
            for p in "0123456789abcdef".chars() {
                black_box(trie.words_with_prefix(&p.to_string()));
            }
        })
    });
}

// Sparse random digraph; the searches run from a fixed node to every 100th
// node.
fn bench_graph_search(c: &mut Criterion) {
    let n = 5_000u64;
    let mut g = Graph::new();
    let mut picks = lcg(29);
    for from in 0..n {
        for _ in 0..3 {
            let to = picks.next().unwrap_or(0) % n;
            g.insert_edge(from, to);
        }
    }
    c.bench_function("graph::bfs_5k_nodes", |b| {
        b.iter(|| {
            (0..n)
                .step_by(100)
                .filter(|t| bfs_path_exists(&g, &0, t))
                .count()
        })
    });
    c.bench_function("graph::dfs_5k_nodes", |b| {
        b.iter(|| {
            (0..n)
                .step_by(100)
                .filter(|t| dfs_path_exists(&g, &0, t))
                .count()
        })
    });
}

criterion_group! {
    name = benches_sequences;
    config = bench_config(12);
    targets = bench_push_100k, bench_lists, bench_queues
}
criterion_group! {
    name = benches_trees;
    config = bench_config(12);
    targets = bench_heaps, bench_bst, bench_trie, bench_graph_search
}
criterion_main!(benches_sequences, benches_trees);
