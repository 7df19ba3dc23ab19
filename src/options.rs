// src/options.rs
use clap::ValueEnum;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain sentences, one fact per line
    #[default]
    Text,
    /// A single pretty-printed JSON object
    Json,
}
