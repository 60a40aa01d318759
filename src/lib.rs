//! A max-priority-queue on an array-backed binary heap.
//!
//! Items carry an opaque value and an `f64` priority; the greatest priority is
//! extracted first. The queue can be serialized in extraction order without
//! being changed by it.
//!
//! ```
//! use maxheap::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! queue.insert("apple", 10.0);
//! queue.insert("carrot", 11.0);
//! assert_eq!(
//!     queue.to_json().unwrap(),
//!     r#"[{"value":"carrot","priority":11.0},{"value":"apple","priority":10.0}]"#
//! );
//! assert_eq!(queue.extract_max().unwrap().value, "carrot");
//! assert_eq!(queue.len(), 1);
//! ```

pub mod error;
pub mod item;
pub mod priority_queue;
mod serialize;

#[cfg(test)]
mod testing;

pub use crate::error::{Error, Result};
pub use crate::item::Item;
pub use crate::priority_queue::PriorityQueue;
