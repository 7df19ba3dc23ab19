pub mod prime_sequence;
pub mod range_query;
pub mod statistics;

pub use prime_sequence::PrimeSequence;
pub use range_query::RangeQuery;
pub use statistics::PrimeStatistics;
