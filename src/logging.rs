// src/logging.rs
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::io::Write;

/// Installs the global logger on stderr so stdout carries only prompts and
/// the report.
pub fn init(level: LevelFilter) {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(buf, "[{}] {}", record.level().as_str().to_lowercase(), record.args())
        });
    // A second init (e.g. from tests) keeps the first logger.
    if builder.try_init().is_err() {
        log::debug!("logger already initialised");
    }
}
