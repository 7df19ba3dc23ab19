// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum PrimeRangeError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<PrimeRangeError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, PrimeRangeError>;

/// Domain-layer specific errors.
///
/// Raised when a caller validates a range up front, or asks for a sieve whose
/// table cannot be allocated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Start of the range must be less than or equal to the end of the range.")]
    StartAfterEnd { start: i64, end: i64 },

    #[error("Range values must be non-negative.")]
    NegativeBound { start: i64, end: i64 },

    #[error("Bound {bound} is too large to sieve in memory")]
    BoundTooLarge { bound: i64 },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Failed to obtain a range: {reason}")]
    RangeUnavailable {
        reason: String,
        #[source]
        source: Option<Box<PrimeRangeError>>,
    },

    #[error("Failed to present report: {reason}")]
    PresentationFailed {
        reason: String,
        #[source]
        source: Option<Box<PrimeRangeError>>,
    },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to parse {format} output: {details}")]
    SerializationError { format: String, details: String },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },

    #[error("Input ended before a valid range was entered")]
    InputClosed,
}

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for PrimeRangeError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PrimeRangeError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<PrimeRangeError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| PrimeRangeError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }
}
