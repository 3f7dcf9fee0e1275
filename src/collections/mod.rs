//! Auxiliary structures consumed by the graph algorithms

mod comparator;
mod disjoint_set;
mod heap;
mod sequence;

pub use comparator::{by_weight, natural_order, reversed, Comparator};
pub use disjoint_set::DisjointSet;
pub use heap::{heap_sort, HeapError, PriorityHeap};
pub use sequence::{Fifo, Lifo};
