//! # ordkit
//!
//! `ordkit` is a small, comparator-driven algorithms toolkit: an array-backed
//! binary heap priority queue and a family of in-place sorting and selection
//! algorithms behind one dispatch facade.
//!
//! Every algorithm is parameterized by a three-way comparison in the style of
//! [`slice::sort_by`], so the same code sorts ascending, descending, or by any
//! projection of the element type. Natural-order shortcuts exist for `Ord` types.
//!
//! ## Key Features
//!
//! - **Priority queue**: [`PriorityQueue`] owns its comparator, grows by doubling,
//!   shrinks by halving at quarter occupancy, and iterates over a sorted snapshot.
//! - **Sorts**: heap sort (in place, O(1) extra), merge sort (stable, O(n) buffer)
//!   and randomized quicksort, selected by [`Variant`].
//! - **Selection**: randomized quickselect returning the element of rank `k`.
//! - **Reproducibility**: shuffles draw from a [`Config`] that can carry a seed.
//!
//! ## Usage
//!
//! ```rust
//! use ordkit::prelude::*;
//!
//! let mut v = [10, 3, 5, 1, 20, 8];
//!
//! sort(&mut v, Variant::Quick);
//! assert_eq!(v, [1, 3, 5, 8, 10, 20]);
//!
//! assert_eq!(select(&mut v, 2), Ok(&5));
//!
//! sort_by(&mut v, |a, b| b.cmp(a), Variant::Merge);
//! assert_eq!(v, [20, 10, 8, 5, 3, 1]);
//!
//! sort(&mut v, Variant::Heap);
//! assert_eq!(v, [1, 3, 5, 8, 10, 20]);
//!
//! let mut pq = min_pq(2);
//! pq.insert(10);
//! pq.insert(5);
//! pq.insert(20);
//! assert_eq!(pq.peek(), Ok(&5));
//! assert_eq!(pq.iter().collect::<Vec<_>>(), vec![5, 10, 20]);
//! ```
//!
//! ## Errors
//!
//! Failures are ordinary [`Result`] values: an empty queue yields
//! [`Error::EmptyContainer`], an out-of-range rank [`Error::InvalidArgument`],
//! and an unknown variant name or tag [`Error::UnsupportedVariant`].
//!
//! ## Logging
//!
//! Dispatch and queue resizing emit [`tracing`] events at `debug` and `trace`
//! level. The crate installs no subscriber.

pub mod algo;
pub mod core;
pub mod dispatch;
pub mod error;
pub mod heap;
pub mod partition;

pub use crate::core::{Config, NaturalOrder, Variant};
pub use dispatch::{
    max_pq, min_pq, priority_queue, select, select_by, select_with, sort, sort_by, sort_with,
};
pub use error::{Error, Result};
pub use heap::{PriorityQueue, SortedIter};

pub mod prelude {
    pub use crate::core::{Config, Variant};
    pub use crate::dispatch::{
        max_pq, min_pq, priority_queue, select, select_by, select_with, sort, sort_by, sort_with,
    };
    pub use crate::error::Error;
    pub use crate::heap::PriorityQueue;
}
