//! Error types for the scoring engine

use thiserror::Error;

/// Scoring engine errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dictionary error: {0}")]
    Dictionary(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for scoring operations
pub type Result<T> = std::result::Result<T, Error>;
