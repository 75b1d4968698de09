/// Error types for the national day analysis crates
use thiserror::Error;

/// Main error type for loading and analyzing national day events
#[derive(Error, Debug)]
pub enum NdoError {
    /// Failed to read or deserialize CSV data
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Display date did not match the `DD.Mon` format
    #[error("Failed to parse display date: {0:?}")]
    DateParse(String),

    /// Coincidence size outside `0..=n`
    #[error("Invalid coincidence size k={k} for n={n} events")]
    InvalidCoincidenceSize { k: u32, n: u32 },

    /// Probability outside `[0, 1]`
    #[error("Invalid probability {0}: must lie within [0, 1]")]
    InvalidProbability(f64),

    /// A binomial model needs at least one event
    #[error("Invalid event count {0}: must be positive")]
    InvalidEventCount(u32),
}

/// Type alias for Results using NdoError
pub type Result<T> = std::result::Result<T, NdoError>;
