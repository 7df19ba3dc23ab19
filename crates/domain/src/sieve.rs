// crates/domain/src/sieve.rs
use log::{trace, warn};
use prime_range_shared_kernel::{Bound, DomainError, DomainResult};

use crate::model::PrimeSequence;

/// All primes in `[0, n]`, ascending, by the Sieve of Eratosthenes.
///
/// `n < 2` yields an empty sequence without allocating a table. A bound whose
/// table cannot be allocated is logged and also yields an empty sequence; use
/// [`try_sieve`] to tell that case apart.
pub fn sieve(n: i64) -> PrimeSequence {
    try_sieve(n).unwrap_or_else(|err| {
        warn!("{err}");
        PrimeSequence::empty()
    })
}

/// Like [`sieve`], but fails with [`DomainError::BoundTooLarge`] when the
/// `n + 1` entry primality table cannot be allocated.
pub fn try_sieve(n: i64) -> DomainResult<PrimeSequence> {
    let bound = Bound::new(n);
    if n < Bound::FIRST_PRIME {
        return Ok(PrimeSequence::empty());
    }
    let too_large = || DomainError::BoundTooLarge { bound: n };
    let limit = bound.table_limit().ok_or_else(too_large)?;
    let is_prime = primality_table(limit).ok_or_else(too_large)?;

    let primes: Vec<u64> = is_prime
        .iter()
        .enumerate()
        .skip(2)
        .filter_map(|(i, &prime)| prime.then_some(i as u64))
        .collect();

    trace!("sieve({bound}) found {} primes", primes.len());
    Ok(PrimeSequence::from_sorted(primes))
}

/// Table of `limit + 1` flags where index `i` is true iff `i` is prime, or
/// `None` if the table cannot be allocated.
fn primality_table(limit: usize) -> Option<Vec<bool>> {
    let len = limit.checked_add(1)?;
    let mut is_prime = Vec::new();
    is_prime.try_reserve_exact(len).ok()?;
    is_prime.resize(len, true);
    is_prime[0] = false;
    is_prime[1] = false;

    // `p <= limit / p` is `p * p <= limit` without overflow.
    let mut p = 2;
    while p <= limit / p {
        if is_prime[p] {
            // Multiples below p*p already have a smaller prime factor.
            for multiple in (p * p..=limit).step_by(p) {
                is_prime[multiple] = false;
            }
        }
        p += 1;
    }
    Some(is_prime)
}
