//! Bounded, comparator-driven priority heap

use thiserror::Error;

use super::comparator::Comparator;

/// Slots reserved by [`PriorityHeap::with_capacity`] before the first push
const INITIAL_RESERVE: usize = 1024;

/// Errors raised by [`PriorityHeap`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
    #[error("heap is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },
}

/// Array-backed binary heap with a fixed capacity.
///
/// Ordering is delegated entirely to the comparator: the element that
/// compares `Less` than all others sits at the top and is popped first.
/// Elements that compare `Equal` pop in an unspecified but deterministic
/// order, which is not a stable or strict total order.
pub struct PriorityHeap<T, C> {
    /// Backing storage; grows on demand up to `limit`
    items: Vec<T>,
    /// Number of elements the heap accepts before `push` fails
    limit: usize,
    cmp: C,
}

impl<T, C: Comparator<T>> PriorityHeap<T, C> {
    /// Create an empty heap that holds at most `limit` elements.
    ///
    /// `limit` is a logical bound only; storage grows on demand.
    pub fn with_capacity(limit: usize, cmp: C) -> Self {
        Self {
            items: Vec::with_capacity(limit.min(INITIAL_RESERVE)),
            limit,
            cmp,
        }
    }

    /// Insert a value, failing once the capacity is reached
    pub fn push(&mut self, value: T) -> Result<(), HeapError> {
        if self.is_full() {
            return Err(HeapError::CapacityExceeded {
                capacity: self.limit,
            });
        }
        self.items.push(value);
        let last = self.items.len() - 1;
        sift_up(&mut self.items, last, |a, b| (self.cmp)(a, b).is_lt());
        Ok(())
    }

    /// Remove and return the top-ranked element
    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let top = self.items.swap_remove(0);
        let size = self.items.len();
        sift_down(&mut self.items, 0, size, |a, b| (self.cmp)(a, b).is_lt());
        Some(top)
    }

    /// Peek at the top-ranked element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.limit
    }

    pub fn capacity(&self) -> usize {
        self.limit
    }
}

impl<T: std::fmt::Debug, C> std::fmt::Debug for PriorityHeap<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriorityHeap")
            .field("len", &self.items.len())
            .field("limit", &self.limit)
            .field("items", &self.items)
            .finish()
    }
}

/// Sort a slice in place, ascending according to `cmp`.
///
/// Builds a heap whose top is the greatest element, then repeatedly moves
/// the top behind the shrinking heap. Not stable.
pub fn heap_sort<T, C: Comparator<T>>(items: &mut [T], cmp: C) {
    let len = items.len();
    if len < 2 {
        return;
    }
    let above = |a: &T, b: &T| cmp(a, b).is_gt();

    for index in (0..len / 2).rev() {
        sift_down(items, index, len, above);
    }
    for end in (1..len).rev() {
        items.swap(0, end);
        sift_down(items, 0, end, above);
    }
}

/// Move `items[index]` towards the root while it ranks above its parent.
fn sift_up<T>(items: &mut [T], mut index: usize, above: impl Fn(&T, &T) -> bool) {
    while index > 0 {
        let parent = (index - 1) / 2;
        if !above(&items[index], &items[parent]) {
            break;
        }
        items.swap(index, parent);
        index = parent;
    }
}

/// Move `items[index]` towards the leaves of the heap prefix `items[..size]`.
fn sift_down<T>(items: &mut [T], mut index: usize, size: usize, above: impl Fn(&T, &T) -> bool) {
    loop {
        let left = index * 2 + 1;
        if left >= size {
            break;
        }
        let right = left + 1;
        let best = if right < size && above(&items[right], &items[left]) {
            right
        } else {
            left
        };
        if !above(&items[best], &items[index]) {
            break;
        }
        items.swap(best, index);
        index = best;
    }
}
