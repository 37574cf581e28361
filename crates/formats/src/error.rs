//! Error types for dataset IO

use thiserror::Error;

/// Dataset IO errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid file: {0}")]
    InvalidFile(String),
}

/// Result type alias for dataset IO
pub type Result<T> = std::result::Result<T, Error>;
