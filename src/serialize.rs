//! Ordered serialization of a `PriorityQueue`.
//!
//! A heap array is not sorted, so the only way to read a queue in extraction
//! order is to extract everything. `Drain` does that into a buffer, then puts
//! every item back when it is dropped. Encoding runs against the buffer in
//! between, so the queue is restored whether encoding succeeds, fails, or
//! panics.

use crate::error::{Error, Result};
use crate::item::Item;
use crate::priority_queue::{parent, PriorityQueue};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

struct Drain<'a, T> {
    queue: &'a mut PriorityQueue<T>,
    /// Extracted items, greatest priority first.
    drained: Vec<Item<T>>,
    /// `origin[k]` is the index that `drained[k]` held before draining began.
    origin: Vec<usize>,
}

impl<'a, T> Drain<'a, T> {
    fn new(queue: &'a mut PriorityQueue<T>) -> Self {
        let len = queue.len();
        let mut drain = Self {
            queue,
            drained: Vec::with_capacity(len),
            origin: Vec::with_capacity(len),
        };
        drain.drain_all();
        drain
    }

    fn drain_all(&mut self) {
        // slots[i] is the pre-drain index of whatever item currently sits at index i.
        let mut slots: Vec<usize> = (0..self.queue.len()).collect();
        while let Some((item, settled)) = self.queue.pop_root() {
            // Mirrors the root/last swap and the pop.
            let from = slots.swap_remove(0);
            replay_sift_down(&mut slots, settled);
            self.drained.push(item);
            self.origin.push(from);
        }
    }
}

/// A sift-down from the root that stops at `settled` swapped the moving item
/// with every node on the path down to `settled`. Applies the same swaps to `slots`.
fn replay_sift_down(slots: &mut [usize], settled: usize) {
    let mut path = Vec::new();
    let mut i = settled;
    while i > 0 {
        path.push(i);
        i = parent(i);
    }
    let mut at = 0;
    for &next in path.iter().rev() {
        slots.swap(at, next);
        at = next;
    }
}

impl<'a, T> Drop for Drain<'a, T> {
    fn drop(&mut self) {
        debug_assert!(self.queue.is_empty());
        let n = self.drained.len();
        debug!("restoring {} items", n);

        // Reinserting in original-index order reproduces the original array
        // exactly: each item's parent is already in place and is not smaller,
        // so no insert sifts.
        let mut restored: Vec<Option<Item<T>>> = (0..n).map(|_| None).collect();
        for (item, from) in self.drained.drain(..).zip(self.origin.drain(..)) {
            restored[from] = Some(item);
        }
        for item in restored.into_iter().flatten() {
            self.queue.push(item);
        }
    }
}

impl<T> PriorityQueue<T> {
    /// Hands `encode` every item in extraction order, then restores the queue.
    ///
    /// The queue's contents and layout are the same afterwards whatever
    /// `encode` returns, and also if it panics.
    pub fn serialize_with<R, E, F>(&mut self, encode: F) -> core::result::Result<R, E>
    where
        F: FnOnce(&[Item<T>]) -> core::result::Result<R, E>,
    {
        let drain = Drain::new(self);
        debug!("serializing {} items", drain.drained.len());
        let encoded = encode(drain.drained.as_slice());
        drop(drain);
        encoded
    }
}

impl<T: Serialize> PriorityQueue<T> {
    /// Encodes the queue as a JSON array of `{"value", "priority"}` objects,
    /// greatest priority first.
    pub fn to_json(&mut self) -> Result<String> {
        self.serialize_with(serde_json::to_string)
            .map_err(Error::Encoding)
    }

    /// Like `to_json`, indented by two spaces.
    pub fn to_json_pretty(&mut self) -> Result<String> {
        self.serialize_with(serde_json::to_string_pretty)
            .map_err(Error::Encoding)
    }

    pub fn write_json<W: std::io::Write>(&mut self, writer: W) -> Result<()> {
        self.serialize_with(|items| serde_json::to_writer(writer, items))
            .map_err(Error::Encoding)
    }
}

impl<T: DeserializeOwned> PriorityQueue<T> {
    /// Builds a queue from the array form produced by `to_json`. The array
    /// does not have to be in priority order.
    pub fn from_json(json: &str) -> Result<Self> {
        let items: Vec<Item<T>> = serde_json::from_str(json).map_err(Error::Decoding)?;
        debug!("decoded {} items", items.len());
        Ok(items.into_iter().collect())
    }
}
