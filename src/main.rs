// src/main.rs
use anyhow::Result;
use clap::Parser;
use prime_range::args::Args;
use prime_range::config::Config;
use prime_range::logging;
use prime_range::presentation::ReportWriter;
use prime_range::sources::{FlagRange, InteractivePrompt};
use prime_range_ports::RangeSource;
use prime_range_usecase::ReportPrimeRange;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = Config::from(Args::parse());
    logging::init(config.log_level);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<()> {
    let mut sink = ReportWriter::new(io::stdout(), config.format);

    let mut source: Box<dyn RangeSource> = match config.range {
        Some((start, end)) => Box::new(FlagRange::new(start, end)),
        None => Box::new(InteractivePrompt::new(io::stdin().lock(), io::stdout())),
    };

    ReportPrimeRange::new(source.as_mut(), &mut sink).run()?;
    Ok(())
}
