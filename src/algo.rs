//! In-place sorting and selection algorithms.
//!
//! This module implements:
//! - **Heap sort**: in-place heapify over raw indices, O(1) extra space, not stable.
//! - **Merge sort**: top-down, one auxiliary buffer reused by every merge, stable.
//! - **Quicksort**: one up-front shuffle, then recursive Hoare partitioning, not stable.
//! - **Quickselect**: one up-front shuffle, then iterative partitioning toward rank `k`.
//!
//! Every function takes a comparator in the style of [`slice::sort_by`] and
//! reorders the caller's slice in place. The shuffling algorithms come in two
//! forms: the plain one draws from [`Config::default`], the `_with_rng` one
//! from a caller-supplied generator.

use crate::core::Config;
use crate::error::{Error, Result};
use crate::partition::{partition, shuffle};
use rand::Rng;
use std::cmp::Ordering;

/// Sorts `v` with heap sort.
///
/// Builds a heap whose root is the greatest element under `cmp` bottom-up,
/// then repeatedly swaps the root to the shrinking tail and re-sinks.
///
/// # Examples
///
/// ```
/// use ordkit::algo::heap_sort_by;
///
/// let mut v = [10, 3, 5, 1, 20, 8];
/// heap_sort_by(&mut v, |a, b| a.cmp(b));
/// assert_eq!(v, [1, 3, 5, 8, 10, 20]);
/// ```
pub fn heap_sort_by<T, F>(v: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut n = v.len();
    for k in (1..=n / 2).rev() {
        sink(v, k, n, &mut cmp);
    }
    while n > 1 {
        v.swap(0, n - 1);
        n -= 1;
        sink(v, 1, n, &mut cmp);
    }
}

/// Sinks 1-based position `k` within the first `n` elements of `v`.
fn sink<T, F>(v: &mut [T], mut k: usize, n: usize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while 2 * k <= n {
        let mut j = 2 * k;
        if j < n && less(v, j, j + 1, cmp) {
            j += 1;
        }
        if !less(v, k, j, cmp) {
            break;
        }
        v.swap(k - 1, j - 1);
        k = j;
    }
}

#[inline]
fn less<T, F>(v: &[T], i: usize, j: usize, cmp: &mut F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    cmp(&v[i - 1], &v[j - 1]) == Ordering::Less
}

/// Sorts `v` with a stable top-down merge sort.
///
/// Allocates one auxiliary buffer the size of `v`. On ties the element from
/// the left half is taken first, so equal elements keep their input order.
///
/// # Examples
///
/// ```
/// use ordkit::algo::merge_sort_by;
///
/// let mut v = [10, 3, 5, 1, 20, 8];
/// merge_sort_by(&mut v, |a, b| b.cmp(a));
/// assert_eq!(v, [20, 10, 8, 5, 3, 1]);
/// ```
pub fn merge_sort_by<T, F>(v: &mut [T], mut cmp: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        return;
    }
    let mut aux = v.to_vec();
    merge_sort_range(v, &mut aux, 0, len, &mut cmp);
}

/// Sorts the half-open range `lo..hi`.
fn merge_sort_range<T, F>(v: &mut [T], aux: &mut [T], lo: usize, hi: usize, cmp: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if hi - lo < 2 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    merge_sort_range(v, aux, lo, mid, cmp);
    merge_sort_range(v, aux, mid, hi, cmp);
    merge(v, aux, lo, mid, hi, cmp);
}

/// Merges sorted runs `lo..mid` and `mid..hi`.
fn merge<T, F>(v: &mut [T], aux: &mut [T], lo: usize, mid: usize, hi: usize, cmp: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    aux[lo..hi].clone_from_slice(&v[lo..hi]);

    let (mut i, mut j) = (lo, mid);
    for slot in &mut v[lo..hi] {
        // Right wins only when strictly less; ties go left.
        let take_right = if i >= mid {
            true
        } else if j >= hi {
            false
        } else {
            cmp(&aux[j], &aux[i]) == Ordering::Less
        };

        if take_right {
            slot.clone_from(&aux[j]);
            j += 1;
        } else {
            slot.clone_from(&aux[i]);
            i += 1;
        }
    }
}

/// Sorts `v` with randomized quicksort.
///
/// # Examples
///
/// ```
/// use ordkit::algo::quick_sort_by;
///
/// let mut v = [10, 3, 5, 1, 20, 8];
/// quick_sort_by(&mut v, |a, b| a.cmp(b));
/// assert_eq!(v, [1, 3, 5, 8, 10, 20]);
/// ```
pub fn quick_sort_by<T, F>(v: &mut [T], cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quick_sort_with_rng(v, &mut Config::default().rng(), cmp);
}

/// Sorts `v` with quicksort, shuffling with `rng`.
pub fn quick_sort_with_rng<T, F, R>(v: &mut [T], rng: &mut R, mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
    R: Rng + ?Sized,
{
    shuffle(v, rng);
    quick_sort_range(v, &mut cmp);
}

fn quick_sort_range<T, F>(v: &mut [T], cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() < 2 {
        return;
    }
    let p = partition(v, cmp);
    let (left, right) = v.split_at_mut(p);
    quick_sort_range(left, cmp);
    quick_sort_range(&mut right[1..], cmp);
}

/// Returns the element of rank `k` (0-indexed) under `cmp`.
///
/// `v` is reordered as a side effect: afterwards `v[k]` holds the returned
/// element, with nothing greater before it and nothing less after it.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `k >= v.len()`. `v` is not touched
/// in that case.
///
/// # Examples
///
/// ```
/// use ordkit::algo::quick_select_by;
///
/// let mut v = [10, 3, 5, 1, 20, 8];
/// assert_eq!(quick_select_by(&mut v, 2, |a, b| a.cmp(b)), Ok(&5));
/// ```
pub fn quick_select_by<T, F>(v: &mut [T], k: usize, cmp: F) -> Result<&T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    quick_select_with_rng(v, k, &mut Config::default().rng(), cmp)
}

/// Returns the element of rank `k` under `cmp`, shuffling with `rng`.
pub fn quick_select_with_rng<'a, T, F, R>(
    v: &'a mut [T],
    k: usize,
    rng: &mut R,
    mut cmp: F,
) -> Result<&'a T>
where
    F: FnMut(&T, &T) -> Ordering,
    R: Rng + ?Sized,
{
    let len = v.len();
    if k >= len {
        return Err(Error::InvalidArgument { index: k, len });
    }

    shuffle(v, rng);
    let (mut lo, mut hi) = (0, len - 1);
    while hi > lo {
        let j = lo + partition(&mut v[lo..=hi], &mut cmp);
        match j.cmp(&k) {
            Ordering::Less => lo = j + 1,
            Ordering::Greater => hi = j - 1,
            Ordering::Equal => break,
        }
    }
    Ok(&v[k])
}
