// src/presentation.rs
use crate::options::OutputFormat;
use prime_range_ports::{RangeReport, ReportSink};
use prime_range_shared_kernel::{ErrorContext, Result};
use std::io::Write;

/// Writes finished reports in the configured format.
pub struct ReportWriter<W> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for ReportWriter<W> {
    fn emit(&mut self, report: &RangeReport) -> Result<()> {
        let rendered = match self.format {
            OutputFormat::Text => render_text(report),
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(report)?;
                json.push('\n');
                json
            }
        };
        self.out.write_all(rendered.as_bytes()).context("writing report")?;
        self.out.flush().context("flushing report")
    }
}

pub fn render_text(report: &RangeReport) -> String {
    let (start, end) = (report.start, report.end);
    let mut text = if report.last_three_primes.is_empty() {
        format!("No prime numbers found in the range [{start}, {end}]\n")
    } else {
        let primes = report
            .last_three_primes
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!("The last prime numbers in the range [{start}, {end}] are: {primes}\n")
    };
    text.push_str(&format!(
        "The number of prime numbers in this range is: {}\n",
        report.total_count
    ));
    text
}
