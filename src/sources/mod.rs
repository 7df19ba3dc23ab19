// src/sources/mod.rs
//! Adapters that supply the range to analyse.

pub mod flags;
pub mod prompt;

pub use flags::FlagRange;
pub use prompt::InteractivePrompt;
