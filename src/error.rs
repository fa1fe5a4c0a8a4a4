//! Error types for point analysis

use thiserror::Error;

/// Result type for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Analysis errors
#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error("No points to search")]
    EmptyCollection,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Count {0} cannot be represented as a float")]
    CountConversion(usize),
}
