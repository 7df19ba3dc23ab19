// crates/domain/src/model/statistics.rs
use prime_range_shared_kernel::PrimeCount;
use serde::{Deserialize, Serialize};

/// Summary of the primes found in a range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimeStatistics {
    /// Highest primes of the range, ascending; at most [`Self::TAIL_LEN`].
    pub last_three_primes: Vec<u64>,
    pub total_count: PrimeCount,
}

impl PrimeStatistics {
    pub const TAIL_LEN: usize = 3;

    pub fn empty() -> Self {
        Self::default()
    }

    /// Summarises an ascending sequence of in-range primes.
    pub fn from_primes(primes: &[u64]) -> Self {
        let tail_start = primes.len().saturating_sub(Self::TAIL_LEN);
        Self {
            last_three_primes: primes[tail_start..].to_vec(),
            total_count: PrimeCount::new(primes.len()),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total_count.is_zero()
    }
}
