// src/config.rs
use crate::args::Args;
use crate::options::OutputFormat;
use log::LevelFilter;

/// Resolved run settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `Some` when the range came from flags; `None` means prompt for it.
    pub range: Option<(i64, i64)>,
    pub format: OutputFormat,
    pub log_level: LevelFilter,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        // clap enforces that the two flags come together
        let range = args.range.start.zip(args.range.end);
        Self {
            range,
            format: args.output.format,
            log_level: args.behavior.log_level,
        }
    }
}
