// crates/ports/src/report.rs
use prime_range_shared_kernel::{PrimeCount, Result};
use serde::{Deserialize, Serialize};

/// Outcome of one run, as handed to an output port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeReport {
    pub start: i64,
    pub end: i64,
    pub last_three_primes: Vec<u64>,
    pub total_count: PrimeCount,
}

pub trait ReportSink {
    fn emit(&mut self, report: &RangeReport) -> Result<()>;
}
