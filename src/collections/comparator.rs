//! Caller-supplied orderings

use std::cmp::Ordering;

use crate::graph::Edge;

/// A total order over `T`, supplied by the caller.
///
/// Any `Fn(&T, &T) -> Ordering` is a comparator. `Less` means the first
/// argument ranks ahead of the second; structures driven by a comparator
/// have no intrinsic notion of "smaller".
pub trait Comparator<T>: Fn(&T, &T) -> Ordering {}

impl<T, F> Comparator<T> for F where F: Fn(&T, &T) -> Ordering {}

/// Natural ascending order for any `Ord` type.
pub fn natural_order<T: Ord>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

/// Orders edges by ascending weight.
pub fn by_weight(a: &Edge, b: &Edge) -> Ordering {
    a.weight().cmp(&b.weight())
}

/// Reverses a comparator, turning a min-first heap into a max-first one.
pub fn reversed<T, C: Comparator<T>>(cmp: C) -> impl Comparator<T> {
    move |a: &T, b: &T| cmp(b, a)
}
