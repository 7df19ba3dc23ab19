// crates/shared-kernel/src/value_objects/bound.rs
use serde::{Deserialize, Serialize};

/// Inclusive upper limit handed to the sieve.
///
/// Any `i64` is accepted; values below 2 simply have no primes beneath them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bound(i64);

impl Bound {
    /// Smallest bound that can contain a prime.
    pub const FIRST_PRIME: i64 = 2;

    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Upper index of the primality table, or `None` when the bound is below 2
    /// or not representable as a `usize` index.
    ///
    /// This says nothing about whether a table that large can be allocated.
    #[inline]
    pub fn table_limit(self) -> Option<usize> {
        if self.0 < Self::FIRST_PRIME {
            return None;
        }
        usize::try_from(self.0).ok()
    }
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
