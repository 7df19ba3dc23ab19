use log::{info, warn};
use prime_range_domain::{PrimeStatistics, RangeQuery};
use prime_range_ports::{RangeDto, RangeReport, RangeSource, ReportSink};
use prime_range_shared_kernel::{ApplicationError, Result};

pub struct ReportPrimeRange<'a> {
    source: &'a mut dyn RangeSource,
    sink: &'a mut dyn ReportSink,
}

impl<'a> ReportPrimeRange<'a> {
    pub fn new(source: &'a mut dyn RangeSource, sink: &'a mut dyn ReportSink) -> Self {
        Self { source, sink }
    }

    pub fn run(&mut self) -> Result<RangeReport> {
        let range = self.source.obtain().map_err(|e| ApplicationError::RangeUnavailable {
            reason: e.to_string(),
            source: Some(Box::new(e)),
        })?;
        let query = dto_to_query(range);
        if !query.is_well_formed() {
            warn!("range source returned malformed range {query}; reporting no primes");
        }

        let report = to_report(query, query.try_statistics()?);
        info!("{} primes in {query}", report.total_count);

        self.sink.emit(&report).map_err(|e| ApplicationError::PresentationFailed {
            reason: e.to_string(),
            source: Some(Box::new(e)),
        })?;
        Ok(report)
    }
}

fn dto_to_query(range: RangeDto) -> RangeQuery {
    RangeQuery::new(range.start, range.end)
}

fn to_report(query: RangeQuery, stats: PrimeStatistics) -> RangeReport {
    RangeReport {
        start: query.start,
        end: query.end,
        last_three_primes: stats.last_three_primes,
        total_count: stats.total_count,
    }
}
