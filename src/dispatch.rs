//! Single entry point over the algorithms and the queue.
//!
//! [`sort_by`] routes to heap sort, merge sort or quicksort by [`Variant`];
//! [`select_by`] forwards to quickselect. The natural-order forms use
//! [`Ord::cmp`], and the `_with` forms take a [`Config`] for the shuffle seed.

use crate::algo::{heap_sort_by, merge_sort_by, quick_select_with_rng, quick_sort_with_rng};
use crate::core::{Config, NaturalOrder, Variant};
use crate::error::Result;
use crate::heap::PriorityQueue;
use std::cmp::Ordering;

/// Sorts `v` in ascending natural order with the chosen algorithm.
///
/// ```
/// use ordkit::{sort, Variant};
///
/// let mut v = [10, 3, 5, 1, 20, 8];
/// sort(&mut v, Variant::Heap);
/// assert_eq!(v, [1, 3, 5, 8, 10, 20]);
/// ```
pub fn sort<T: Ord + Clone>(v: &mut [T], variant: Variant) {
    sort_by(v, T::cmp, variant);
}

/// Sorts `v` by `cmp` with the chosen algorithm.
pub fn sort_by<T, F>(v: &mut [T], cmp: F, variant: Variant)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    sort_with(v, cmp, variant, &Config::default());
}

/// Sorts `v` by `cmp`, drawing any shuffle from `config`.
pub fn sort_with<T, F>(v: &mut [T], cmp: F, variant: Variant, config: &Config)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    tracing::debug!(%variant, len = v.len(), seed = ?config.seed, "dispatching sort");
    match variant {
        Variant::Heap => heap_sort_by(v, cmp),
        Variant::Merge => merge_sort_by(v, cmp),
        Variant::Quick => quick_sort_with_rng(v, &mut config.rng(), cmp),
    }
}

/// Returns the element of rank `k` in ascending natural order.
///
/// ```
/// use ordkit::select;
///
/// let mut v = [10, 3, 5, 1, 20, 8];
/// assert_eq!(select(&mut v, 2), Ok(&5));
/// assert!(select(&mut v, 6).is_err());
/// ```
pub fn select<T: Ord>(v: &mut [T], k: usize) -> Result<&T> {
    select_by(v, k, T::cmp)
}

/// Returns the element of rank `k` under `cmp`.
pub fn select_by<T, F>(v: &mut [T], k: usize, cmp: F) -> Result<&T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    select_with(v, k, cmp, &Config::default())
}

/// Returns the element of rank `k` under `cmp`, drawing the shuffle from `config`.
pub fn select_with<'a, T, F>(
    v: &'a mut [T],
    k: usize,
    cmp: F,
    config: &Config,
) -> Result<&'a T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    tracing::debug!(k, len = v.len(), seed = ?config.seed, "dispatching select");
    quick_select_with_rng(v, k, &mut config.rng(), cmp)
}

/// Creates a priority queue ordered by `cmp`.
pub fn priority_queue<T, C>(capacity: usize, cmp: C) -> PriorityQueue<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    PriorityQueue::new(capacity, cmp)
}

/// Creates a queue that yields the smallest element first.
///
/// ```
/// let mut pq = ordkit::min_pq(2);
/// pq.insert(10);
/// pq.insert(5);
/// pq.insert(20);
/// assert_eq!(pq.peek(), Ok(&5));
/// ```
pub fn min_pq<T: Ord>(capacity: usize) -> PriorityQueue<T, NaturalOrder<T>> {
    PriorityQueue::new(capacity, T::cmp as NaturalOrder<T>)
}

/// Creates a queue that yields the largest element first.
pub fn max_pq<T: Ord>(capacity: usize) -> PriorityQueue<T, NaturalOrder<T>> {
    PriorityQueue::new(capacity, reverse_cmp as NaturalOrder<T>)
}

fn reverse_cmp<T: Ord>(a: &T, b: &T) -> Ordering {
    b.cmp(a)
}
