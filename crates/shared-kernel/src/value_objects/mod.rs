// crates/shared-kernel/src/value_objects/mod.rs
pub mod bound;
pub mod counts;

pub use bound::Bound;
pub use counts::PrimeCount;
