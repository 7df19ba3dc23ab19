// crates/shared-kernel/src/value_objects/counts.rs
use serde::{Deserialize, Serialize};

/// Number of primes found in a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrimeCount(usize);

impl PrimeCount {
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Default for PrimeCount {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<usize> for PrimeCount {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl PartialEq<usize> for PrimeCount {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

mod display {
    use std::fmt;

    use super::PrimeCount;

    impl fmt::Display for PrimeCount {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }
}
