// src/sources/flags.rs
use log::debug;
use prime_range_domain::RangeQuery;
use prime_range_ports::{RangeDto, RangeSource};
use prime_range_shared_kernel::{PresentationError, Result};

/// Range given as `--start`/`--end`; invalid values are an error, not a retry.
#[derive(Debug, Clone, Copy)]
pub struct FlagRange {
    start: i64,
    end: i64,
}

impl FlagRange {
    pub const fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }
}

impl RangeSource for FlagRange {
    fn obtain(&mut self) -> Result<RangeDto> {
        let query = RangeQuery::validated(self.start, self.end).map_err(|err| {
            PresentationError::InvalidValue {
                flag: "--start/--end".to_string(),
                value: format!("{}..={}", self.start, self.end),
                reason: err.to_string(),
            }
        })?;
        debug!("range {query} taken from flags");
        Ok(RangeDto { start: query.start, end: query.end })
    }
}
