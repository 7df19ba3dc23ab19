// crates/ports/src/range.rs
use prime_range_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// Range handed over by an input port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeDto {
    pub start: i64,
    pub end: i64,
}

/// Supplies one validated range, `0 <= start <= end`.
///
/// Implementations own their retry policy: an interactive source keeps
/// asking, a non-interactive one returns an error.
pub trait RangeSource {
    fn obtain(&mut self) -> Result<RangeDto>;
}
