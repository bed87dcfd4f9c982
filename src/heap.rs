//! Array-backed binary heap priority queue.
//!
//! The queue is ordered by a comparator it owns: the element that compares
//! [`Less`](Ordering::Less) than every other sits at the root. With
//! `Ord::cmp` that is a min-queue, with the reversed comparison a max-queue.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity          |
//! |----------------|---------------------|
//! | `insert`       | O(log n) amortized  |
//! | `extract_root` | O(log n) amortized  |
//! | `peek`         | O(1)                |
//! | `iter`         | O(n) + O(n log n)   |
//!
//! # Example
//!
//! ```rust
//! use ordkit::heap::PriorityQueue;
//!
//! let mut pq = PriorityQueue::new(2, |a: &i32, b: &i32| a.cmp(b));
//! pq.insert(10);
//! pq.insert(5);
//! pq.insert(20);
//!
//! assert_eq!(pq.peek(), Ok(&5));
//! assert_eq!(pq.iter().collect::<Vec<_>>(), vec![5, 10, 20]);
//! assert_eq!(pq.len(), 3);
//! ```

use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

/// Binary heap priority queue parameterized by a comparator.
///
/// Positions are addressed 1-based internally (parent `i / 2`, children `2i`
/// and `2i + 1`); position `i` lives at `data[i - 1]`.
///
/// The queue tracks a logical capacity separate from its length. It doubles
/// when an insert finds it full and halves when an extraction leaves it a
/// quarter full.
pub struct PriorityQueue<T, C> {
    data: Vec<T>,
    capacity: usize,
    cmp: C,
}

impl<T, C> PriorityQueue<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty queue with room for `capacity` elements.
    pub fn new(capacity: usize, cmp: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
            cmp,
        }
    }

    /// Returns `true` if the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements in the queue.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the current logical capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Inserts `x`, growing the queue first if it is full.
    pub fn insert(&mut self, x: T) {
        if self.data.len() == self.capacity {
            self.resize((2 * self.capacity).max(1));
        }
        self.data.push(x);
        self.swim(self.data.len());
    }

    /// Removes and returns the root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the queue is empty. The queue is
    /// left untouched in that case.
    pub fn extract_root(&mut self) -> Result<T> {
        let n = self.data.len();
        if n == 0 {
            return Err(Error::EmptyContainer);
        }

        self.data.swap(0, n - 1);
        let root = self.data.pop().ok_or(Error::EmptyContainer)?;
        self.sink(1);

        let n = self.data.len();
        if n > 0 && n == self.capacity / 4 {
            self.resize(self.capacity / 2);
        }
        Ok(root)
    }

    /// Returns the root without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the queue is empty.
    pub fn peek(&self) -> Result<&T> {
        self.data.first().ok_or(Error::EmptyContainer)
    }

    /// Drains the queue into a vector in extraction order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.data.len());
        while let Ok(x) = self.extract_root() {
            out.push(x);
        }
        out
    }

    /// Returns an iterator over a snapshot of the queue in extraction order.
    ///
    /// The snapshot is taken now; later changes to `self` are not observed.
    pub fn iter(&self) -> SortedIter<T, C>
    where
        T: Clone,
        C: Clone,
    {
        SortedIter {
            queue: self.clone(),
        }
    }

    /// Whether the element at position `i` must come after the one at `j`.
    fn greater(&self, i: usize, j: usize) -> bool {
        (self.cmp)(&self.data[i - 1], &self.data[j - 1]) == Ordering::Greater
    }

    fn swim(&mut self, mut k: usize) {
        while k > 1 && self.greater(k / 2, k) {
            self.data.swap(k - 1, k / 2 - 1);
            k /= 2;
        }
    }

    fn sink(&mut self, mut k: usize) {
        let n = self.data.len();
        while 2 * k <= n {
            let mut j = 2 * k;
            if j < n && self.greater(j, j + 1) {
                j += 1;
            }
            if !self.greater(k, j) {
                break;
            }
            self.data.swap(k - 1, j - 1);
            k = j;
        }
    }

    fn resize(&mut self, capacity: usize) {
        tracing::trace!(
            from = self.capacity,
            to = capacity,
            len = self.data.len(),
            "resizing priority queue"
        );
        if capacity > self.data.capacity() {
            self.data.reserve_exact(capacity - self.data.len());
        } else {
            self.data.shrink_to(capacity);
        }
        self.capacity = capacity;
    }
}

impl<T: Clone, C: Clone> Clone for PriorityQueue<T, C> {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.capacity);
        data.extend_from_slice(&self.data);
        Self {
            data,
            capacity: self.capacity,
            cmp: self.cmp.clone(),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("data", &self.data)
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

impl<T, C> Extend<T> for PriorityQueue<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.insert(x);
        }
    }
}

impl<'a, T, C> IntoIterator for &'a PriorityQueue<T, C>
where
    T: Clone,
    C: Fn(&T, &T) -> Ordering + Clone,
{
    type Item = T;
    type IntoIter = SortedIter<T, C>;

    fn into_iter(self) -> SortedIter<T, C> {
        self.iter()
    }
}

/// Single-pass iterator over a private copy of a [`PriorityQueue`].
///
/// Yields elements in extraction order by draining its copy; once exhausted
/// it stays exhausted.
pub struct SortedIter<T, C> {
    queue: PriorityQueue<T, C>,
}

impl<T, C> Iterator for SortedIter<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.extract_root().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.queue.len();
        (n, Some(n))
    }
}

impl<T, C> ExactSizeIterator for SortedIter<T, C> where C: Fn(&T, &T) -> Ordering {}

impl<T, C> FusedIterator for SortedIter<T, C> where C: Fn(&T, &T) -> Ordering {}

impl<T: fmt::Debug, C> fmt::Debug for SortedIter<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedIter")
            .field("remaining", &self.queue.data.len())
            .finish()
    }
}
