// Sequences, stacks and queues exercised the way a caller would, mostly
// checking that the different implementations of the same abstraction agree.
use textbook_dsa::{
    DoublyLinkedList, DynamicArray, Error, MultiStack, Queue, SinglyLinkedList, Stack,
    StringBuilder, TwoStackQueue,
};

// Test: both list flavours behave identically at the ends.
#[test]
fn linked_lists_agree_on_deque_operations() {
    let mut single = SinglyLinkedList::new();
    let mut double = DoublyLinkedList::new();
    for i in 0..6 {
        if i % 2 == 0 {
            single.push_back(i);
            double.push_back(i);
        } else {
            single.push_front(i);
            double.push_front(i);
        }
    }
    assert_eq!(single.to_string(), "[5, 3, 1, 0, 2, 4]");
    assert_eq!(single.to_string(), double.to_string());
    assert_eq!(single.pop_back(), double.pop_back());
    assert_eq!(single.pop_front(), double.pop_front());
    assert_eq!(single.remove(&1), double.remove(&1));
    assert_eq!(single.to_string(), "[3, 0, 2]");
    assert_eq!(single.to_string(), double.to_string());
    assert_eq!(single.len(), double.len());
}

// Test: Stack and Queue over the doubly linked list.
// Verifies: opposite orderings, and that the rendering of each reads
// bottom-to-top and front-to-back respectively.
#[test]
fn stack_and_queue_orderings() {
    let mut s: Stack<char> = Stack::new();
    let mut q: Queue<char> = Queue::new();
    for c in "abc".chars() {
        s.push(c);
        q.enqueue(c);
    }
    assert_eq!(s.to_string(), "[a, b, c]");
    assert_eq!(q.to_string(), "[a, b, c]");
    assert_eq!(s.peek(), Some(&'c'));
    assert_eq!(q.peek(), Some(&'a'));
    assert_eq!(s.iter().collect::<String>(), "cba");
    assert_eq!(q.iter().collect::<String>(), "abc");

    let popped: String = std::iter::from_fn(|| s.pop()).collect();
    let dequeued: String = std::iter::from_fn(|| q.dequeue()).collect();
    assert_eq!(popped, "cba");
    assert_eq!(dequeued, "abc");
    assert!(s.is_empty() && q.is_empty());
    assert_eq!(s.pop(), None);
    assert_eq!(q.dequeue(), None);
}

// Test: TwoStackQueue is observably a Queue.
// Verifies: interleaved enqueue/dequeue sequences produce identical output.
#[test]
fn two_stack_queue_matches_linked_queue() {
    let mut fast = TwoStackQueue::new();
    let mut reference = Queue::new();
    for round in 0..20u32 {
        for i in 0..(round % 4) {
            fast.enqueue(round * 10 + i);
            reference.enqueue(round * 10 + i);
        }
        if round % 3 == 0 {
            assert_eq!(fast.dequeue(), reference.dequeue());
        }
        assert_eq!(fast.peek(), reference.peek());
        assert_eq!(fast.len(), reference.len());
        assert_eq!(fast.to_string(), reference.to_string());
    }
    while let Some(v) = reference.dequeue() {
        assert_eq!(fast.dequeue(), Some(v));
    }
    assert_eq!(fast.dequeue(), None);
}

// Test: MultiStack keeps its stacks independent while the shared array grows.
#[test]
fn multi_stack_independent_stacks() {
    let mut ms = MultiStack::new(3).unwrap();
    for i in 0..5 {
        ms.push(1, i).unwrap();
    }
    ms.push(3, 100).unwrap();
    assert_eq!(ms.stack_len(1).unwrap(), 5);
    assert_eq!(ms.stack_len(2).unwrap(), 0);
    assert_eq!(ms.peek(3).unwrap(), Some(&100));
    assert_eq!(ms.stack_to_string(1).unwrap(), "[0, 1, 2, 3, 4]");
    assert_eq!(ms.stack_to_string(2).unwrap(), "[]");
    assert_eq!(ms.pop(1).unwrap(), Some(4));
    assert_eq!(ms.pop(2).unwrap(), None);
    assert!(ms.contains(1, &3).unwrap());
    assert!(!ms.contains(3, &3).unwrap());
    assert_eq!(ms.capacity() % ms.stack_count(), 0);
}

// Test: stack numbers outside 1..=N are rejected without side effects.
#[test]
fn multi_stack_rejects_bad_stack_numbers() {
    assert!(matches!(
        MultiStack::<u8>::new(0),
        Err(Error::InvalidArgument(_))
    ));
    let mut ms = MultiStack::new(2).unwrap();
    ms.push(2, 'x').unwrap();
    for bad in [0, 3] {
        assert!(ms.push(bad, 'y').is_err());
        assert!(ms.pop(bad).is_err());
        assert!(ms.peek(bad).is_err());
        assert!(ms.stack_len(bad).is_err());
    }
    assert_eq!(ms.stack_len(2).unwrap(), 1);
    assert_eq!(ms.stack_len(1).unwrap(), 0);
}

// Test: DynamicArray growth schedule and positional removal.
#[test]
fn dynamic_array_growth_and_removal() {
    let mut a = DynamicArray::new();
    let mut caps = Vec::new();
    for i in 0..9 {
        a.push(i);
        caps.push(a.capacity());
    }
    assert_eq!(caps, vec![1, 2, 4, 4, 8, 8, 8, 8, 16]);
    assert_eq!(a.remove_at(0), Ok(0));
    assert_eq!(a.remove(&5), Some(5));
    assert_eq!(a.to_string(), "[1, 2, 3, 4, 6, 7, 8]");
    assert_eq!(
        a.remove_at(7),
        Err(Error::IndexOutOfBounds { index: 7, len: 7 })
    );
    assert_eq!(a.index_of(&6), Some(4));
    assert!(DynamicArray::<u8>::with_capacity_and_factor(4, 1).is_err());
}

// Test: StringBuilder growth and lookups.
#[test]
fn string_builder_appends() {
    let mut sb = StringBuilder::new();
    sb.append_char('h').append_char('i');
    assert_eq!(sb.capacity(), 2);
    sb.append_str(", there");
    assert_eq!(sb.len(), 9);
    assert_eq!(sb.capacity(), 18);
    assert_eq!(sb.to_string(), "hi, there");
    assert_eq!(sb.index_of('t'), Some(4));
    assert!(sb.contains(','));
    assert!(!sb.contains('z'));
}
