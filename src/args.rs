// src/args.rs
use crate::options::OutputFormat;
use clap::{Args as ClapArgs, Parser};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(
    name = "prime_range",
    version,
    about = "Count the primes in a range and show the last three",
    long_about = "Count the primes in [start, end] and show the last three.\n\n\
                  Without --start/--end the range is read interactively from stdin."
)]
pub struct Args {
    #[command(flatten)]
    pub range: RangeOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub behavior: BehaviorOptions,
}

#[derive(ClapArgs, Debug)]
pub struct RangeOptions {
    /// Start of the range (inclusive, non-negative)
    #[arg(long, requires = "end", allow_negative_numbers = true, help_heading = "Range")]
    pub start: Option<i64>,

    /// End of the range (inclusive, non-negative)
    #[arg(long, requires = "start", allow_negative_numbers = true, help_heading = "Range")]
    pub end: Option<i64>,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// Report format
    #[arg(long, value_enum, default_value = "text", help_heading = "Output")]
    pub format: OutputFormat,
}

#[derive(ClapArgs, Debug)]
pub struct BehaviorOptions {
    /// Log filter [ off, error, warn, info, debug, trace ]; RUST_LOG overrides it
    #[arg(long, default_value_t = LevelFilter::Warn, help_heading = "Behavior")]
    pub log_level: LevelFilter,
}
