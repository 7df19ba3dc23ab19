//! # Ports
//!
//! Interface definitions for the outside world.
//!
//! - [`range`]: where the range to analyse comes from (prompt, flags, ...)
//! - [`report`]: where the finished report goes
//!
//! The use case layer talks only to these traits, so it never touches
//! stdin, stdout or argument parsing directly.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod range;
pub mod report;

pub use range::{RangeDto, RangeSource};
pub use report::{RangeReport, ReportSink};
