use crate::error::{Error, Result};
use crate::item::Item;
use core::cmp::Ordering;
use log::trace;

/// A max-priority-queue stored as a binary heap in a flat array.
///
/// The children of index `i` live at `2i + 1` and `2i + 2`, and no child has a
/// greater priority than its parent. Every item records its own index; that
/// record is kept in step with the array by `swap`, which is the only place
/// items move.
///
/// Equal priorities come out in whatever order the heap structure yields.
/// There is no secondary key.
#[derive(Clone)]
pub struct PriorityQueue<T> {
    items: Vec<Item<T>>,
}

fn left(parent: usize) -> usize { parent * 2 + 1 }
fn right(parent: usize) -> usize { parent * 2 + 2 }
pub(crate) fn parent(child: usize) -> usize { (child - 1) / 2 }

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new()
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the item with the greatest priority, without removing it.
    pub fn peek(&self) -> Option<&Item<T>> {
        self.items.first()
    }

    /// The backing array, in heap order (not sorted order).
    pub fn as_slice(&self) -> &[Item<T>] {
        &self.items
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Item<T>> {
        self.items.iter()
    }

    pub fn insert(&mut self, value: T, priority: f64) {
        self.push(Item::new(value, priority));
    }

    /// Inserts an item into the partially-sorted heap. The queue takes
    /// ownership and assigns the item's position.
    pub fn push(&mut self, mut item: Item<T>) {
        let index = self.items.len();
        item.position = Some(index);
        self.items.push(item);
        let settled = self.sift_up(index);
        trace!("insert: appended at {}, settled at {}", index, settled);
        self.check();
    }

    /// Removes the item with the greatest priority. The returned item is
    /// detached: its position is `None`.
    pub fn extract_max(&mut self) -> Result<Item<T>> {
        match self.pop_root() {
            Some((item, _)) => {
                trace!("extract_max: priority {}, {} left", item.priority, self.items.len());
                Ok(item)
            }
            None => Err(Error::EmptyQueue),
        }
    }

    /// Changes the priority of the item at `position` and moves it to restore
    /// heap order.
    pub fn update_priority(&mut self, position: usize, priority: f64) -> Result<()> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(position)
            .ok_or(Error::InvalidPosition { position, len })?;
        item.priority = priority;
        if self.sift_up(position) == position {
            self.sift_down(position);
        }
        self.check();
        Ok(())
    }

    /// Consumes the queue, returning its items in extraction order.
    pub fn into_sorted_vec(mut self) -> Vec<Item<T>> {
        let mut sorted = Vec::with_capacity(self.items.len());
        while let Some((item, _)) = self.pop_root() {
            sorted.push(item);
        }
        sorted
    }

    /// Removes the root. Also returns the index at which the former last item
    /// came to rest after sifting down from the root.
    pub(crate) fn pop_root(&mut self) -> Option<(Item<T>, usize)> {
        let last_index = self.items.len().checked_sub(1)?;
        self.swap(0, last_index);
        let mut item = self.items.pop()?;
        item.position = None;
        let settled = self.sift_down(0);
        self.check();
        Some((item, settled))
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
        self.items[a].position = Some(a);
        self.items[b].position = Some(b);
    }

    fn sift_up(&mut self, mut i: usize) -> usize {
        while i > 0 {
            let parent = parent(i);
            assert_ne!(parent, i);
            if self.items[i].cmp_priority(&self.items[parent]) != Ordering::Greater {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
        i
    }

    fn sift_down(&mut self, mut i: usize) -> usize {
        let len = self.items.len();
        loop {
            let left = left(i);
            if left >= len {
                break;
            }
            // Prefer the right child only when it is strictly greater.
            let right = right(i);
            let mut child = left;
            if right < len
                && self.items[right].cmp_priority(&self.items[left]) == Ordering::Greater
            {
                child = right;
            }
            if self.items[child].cmp_priority(&self.items[i]) != Ordering::Greater {
                break;
            }
            self.swap(i, child);
            i = child;
        }
        i
    }

    #[cfg(test)]
    fn check(&self) {
        crate::testing::assert_heap_invariant(self);
    }

    #[cfg(not(test))]
    #[inline]
    fn check(&self) {}
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> core::iter::FromIterator<Item<T>> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = Item<T>>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<Item<T>> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = Item<T>>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.items.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

use core::fmt::{Debug, Formatter};

impl<T: Debug> Debug for PriorityQueue<T> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        write!(fmt, "Q: ")?;
        for item in self.items.iter() {
            write!(fmt, "{:?}@{} ", item.value, item.priority)?;
        }
        Ok(())
    }
}
