// crates/domain/src/model/range_query.rs
use std::fmt;

use prime_range_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Inclusive integer range `[start, end]` to search for primes.
///
/// A query built with [`RangeQuery::new`] may be malformed; the statistics
/// functions treat such a query as empty. [`RangeQuery::validated`] rejects
/// it instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RangeQuery {
    pub start: i64,
    pub end: i64,
}

impl RangeQuery {
    pub const fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Builds a query only if `0 <= start <= end`.
    ///
    /// Ordering is checked before sign, so `(5, -1)` reports
    /// [`DomainError::StartAfterEnd`].
    pub fn validated(start: i64, end: i64) -> DomainResult<Self> {
        if start > end {
            return Err(DomainError::StartAfterEnd { start, end });
        }
        if start < 0 || end < 0 {
            return Err(DomainError::NegativeBound { start, end });
        }
        Ok(Self { start, end })
    }

    #[inline]
    pub const fn is_well_formed(&self) -> bool {
        0 <= self.start && self.start <= self.end
    }
}

impl fmt::Display for RangeQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
