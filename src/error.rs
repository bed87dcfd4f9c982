//! Error types shared by the queue, the algorithms and the dispatcher.

use thiserror::Error;

/// Errors returned by `ordkit` operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `extract_root` or `peek` on a queue with no elements.
    #[error("priority queue underflow")]
    EmptyContainer,

    /// A selection rank outside `[0, len)`.
    #[error("rank {index} out of bounds for sequence of length {len}")]
    InvalidArgument { index: usize, len: usize },

    /// A sort variant name or tag that maps to no algorithm.
    #[error("unsupported sort variant: {0}")]
    UnsupportedVariant(String),

    /// The seed environment variable is set but is not a `u64`.
    #[error("invalid seed in {var}: {value:?}")]
    InvalidSeed { var: &'static str, value: String },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
