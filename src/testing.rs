use crate::item::Item;
use crate::priority_queue::{parent, PriorityQueue};
use core::cmp::Ordering;

pub fn init_test() {
    drop(env_logger::try_init());
}

pub fn queue_from_pairs<T: Clone>(pairs: &[(T, f64)]) -> PriorityQueue<T> {
    let mut queue = PriorityQueue::with_capacity(pairs.len());
    for (value, priority) in pairs.iter() {
        queue.insert(value.clone(), *priority);
    }
    queue
}

/// Checks heap order and that every item's recorded position matches its index.
pub fn assert_heap_invariant<T>(queue: &PriorityQueue<T>) {
    let items: &[Item<T>] = queue.as_slice();
    for (i, item) in items.iter().enumerate() {
        assert_eq!(item.position(), Some(i), "position out of step at index {}", i);
        if i > 0 {
            let p = parent(i);
            assert!(
                items[p].cmp_priority(item) != Ordering::Less,
                "priority {} at {} is below child {} at {}",
                items[p].priority,
                p,
                item.priority,
                i
            );
        }
    }
}

/// Extracts everything, returning values in the order they came out.
pub fn drain_values<T>(queue: &mut PriorityQueue<T>) -> Vec<T> {
    let mut values = Vec::with_capacity(queue.len());
    while let Ok(item) = queue.extract_max() {
        assert_eq!(item.position(), None);
        values.push(item.into_value());
    }
    values
}

/// The backing array as (value, priority) pairs, in heap order.
pub fn layout<T: Clone>(queue: &PriorityQueue<T>) -> Vec<(T, f64)> {
    queue
        .iter()
        .map(|item| (item.value.clone(), item.priority))
        .collect()
}
