//! # Domain
//!
//! Prime generation and range statistics.
//!
//! - [`sieve`]: bounded Sieve of Eratosthenes
//! - [`statistics`]: filtering a sieve to a range and summarising it
//! - [`model`]: the value types passed between the two
//!
//! Everything here is pure and synchronous; no function in this crate
//! performs I/O or fails.

#![allow(clippy::multiple_crate_versions)]

pub mod model;
pub mod sieve;
pub mod statistics;

pub use model::{PrimeSequence, PrimeStatistics, RangeQuery};
pub use sieve::{sieve, try_sieve};
pub use statistics::{primes_in_range, range_statistics, try_range_statistics};
