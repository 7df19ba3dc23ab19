// crates/domain/src/statistics.rs
use log::debug;
use prime_range_shared_kernel::DomainResult;

use crate::model::{PrimeStatistics, RangeQuery};
use crate::sieve::{sieve, try_sieve};

/// Primes in `[start, end]`, ascending.
///
/// A malformed range (`start > end` or a negative bound) has no primes.
pub fn primes_in_range(start: i64, end: i64) -> Vec<u64> {
    let query = RangeQuery::new(start, end);
    if !query.is_well_formed() {
        debug!("ignoring malformed range {query}");
        return Vec::new();
    }
    // well-formed implies start >= 0
    sieve(end).from_start(start.unsigned_abs()).to_vec()
}

/// Count of primes in `[start, end]` and the last three of them, ascending.
///
/// Never fails: a malformed range, or one too large to sieve, yields
/// [`PrimeStatistics::empty`].
pub fn range_statistics(start: i64, end: i64) -> PrimeStatistics {
    let stats = PrimeStatistics::from_primes(&primes_in_range(start, end));
    debug!(
        "range [{start}, {end}]: {} primes, tail {:?}",
        stats.total_count, stats.last_three_primes
    );
    stats
}

/// Like [`range_statistics`], but reports an end bound whose sieve table
/// cannot be allocated instead of treating it as empty.
pub fn try_range_statistics(start: i64, end: i64) -> DomainResult<PrimeStatistics> {
    let query = RangeQuery::new(start, end);
    if !query.is_well_formed() {
        debug!("ignoring malformed range {query}");
        return Ok(PrimeStatistics::empty());
    }
    let primes = try_sieve(end)?;
    let stats = PrimeStatistics::from_primes(primes.from_start(start.unsigned_abs()));
    debug!("range {query}: {} primes, tail {:?}", stats.total_count, stats.last_three_primes);
    Ok(stats)
}

impl RangeQuery {
    pub fn try_statistics(&self) -> DomainResult<PrimeStatistics> {
        try_range_statistics(self.start, self.end)
    }
}
