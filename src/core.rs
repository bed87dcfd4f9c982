//! Core types for ordkit.
//!
//! This module defines:
//! - [`Variant`]: The closed set of sort algorithms the dispatcher routes to.
//! - [`Config`]: Random-source policy for the shuffling algorithms.
//! - [`NaturalOrder`]: Comparator type used by the natural-order queue constructors.

use crate::error::{Error, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::cmp::Ordering;
use std::env::{self, VarError};
use std::fmt;
use std::str::FromStr;

/// Environment variable consulted by [`Config::from_env`].
pub const SEED_ENV: &str = "ORDKIT_SEED";

/// Plain function-pointer comparator, as stored by [`min_pq`](crate::min_pq)
/// and [`max_pq`](crate::max_pq).
pub type NaturalOrder<T> = fn(&T, &T) -> Ordering;

/// Sort algorithm selected by the dispatcher.
///
/// Untyped input (names from a config file, tags off the wire) enters through
/// [`FromStr`] or [`TryFrom<u8>`], which reject anything outside the set with
/// [`Error::UnsupportedVariant`].
///
/// ```
/// use ordkit::Variant;
///
/// assert_eq!("merge".parse::<Variant>(), Ok(Variant::Merge));
/// assert!("bogo".parse::<Variant>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// In-place heap sort. Not stable.
    Heap,
    /// Top-down merge sort with one auxiliary buffer. Stable.
    Merge,
    /// Shuffled quicksort with Hoare partitioning. Not stable.
    Quick,
}

impl Variant {
    /// Every variant, in tag order.
    pub const ALL: [Variant; 3] = [Variant::Heap, Variant::Merge, Variant::Quick];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Variant::Heap => "heap",
            Variant::Merge => "merge",
            Variant::Quick => "quick",
        }
    }

    /// Whether equal elements keep their relative order.
    pub fn is_stable(self) -> bool {
        matches!(self, Variant::Merge)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Variant::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnsupportedVariant(s.to_string()))
    }
}

impl TryFrom<u8> for Variant {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Self> {
        Variant::ALL
            .get(tag as usize)
            .copied()
            .ok_or_else(|| Error::UnsupportedVariant(tag.to_string()))
    }
}

/// Random-source policy for [`shuffle`](crate::partition::shuffle) callers.
///
/// Every shuffle draws from a fresh [`StdRng`]. With a seed the sequence is
/// reproducible; without one the generator is seeded from the thread-local RNG.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Fixed seed for the shuffle generator.
    pub seed: Option<u64>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds a config from [`SEED_ENV`].
    ///
    /// An unset variable yields the default (unseeded) config. A variable that
    /// does not parse as `u64` is an error rather than being silently ignored.
    pub fn from_env() -> Result<Self> {
        match env::var(SEED_ENV) {
            Ok(raw) => {
                let seed = raw.trim().parse::<u64>().map_err(|_| Error::InvalidSeed {
                    var: SEED_ENV,
                    value: raw.clone(),
                })?;
                tracing::debug!(seed, "shuffle seed taken from {}", SEED_ENV);
                Ok(Self::new().with_seed(seed))
            }
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(raw)) => Err(Error::InvalidSeed {
                var: SEED_ENV,
                value: raw.to_string_lossy().into_owned(),
            }),
        }
    }

    /// Returns the generator this config prescribes.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}
