// crates/domain/src/model/prime_sequence.rs
use serde::Serialize;

/// Strictly increasing run of primes produced by the sieve.
///
/// Only the sieve constructs one, so the ordering holds for every value of
/// this type; callers get read-only access.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PrimeSequence(Vec<u64>);

impl PrimeSequence {
    pub(crate) fn from_sorted(primes: Vec<u64>) -> Self {
        debug_assert!(primes.windows(2).all(|w| w[0] < w[1]));
        Self(primes)
    }

    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    #[inline]
    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Primes not smaller than `start`, still ascending.
    pub fn from_start(&self, start: u64) -> &[u64] {
        let first = self.0.partition_point(|&p| p < start);
        &self.0[first..]
    }
}

impl<const N: usize> PartialEq<[u64; N]> for PrimeSequence {
    fn eq(&self, other: &[u64; N]) -> bool {
        self.0 == other
    }
}
