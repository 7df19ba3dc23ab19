// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ApplicationError, DomainError, DomainResult, ErrorContext, InfrastructureError,
    PresentationError, PrimeRangeError, Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{Bound, PrimeCount};
