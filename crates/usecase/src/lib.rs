//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: obtain a range, compute its statistics, emit a report
//!
//! Use cases depend on both domain and ports, but not on any concrete
//! input or output adapter.

#![allow(clippy::multiple_crate_versions)]

pub mod orchestrator;

pub use orchestrator::ReportPrimeRange;
