/// Error types for loading constituency data and parsing widget values
use std::num::ParseIntError;
use thiserror::Error;

/// Main error type for the electoral demographics crates
#[derive(Error, Debug)]
pub enum GedError {
    /// HTTP request failed
    #[cfg(feature = "api")]
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Unexpected HTTP status {status} fetching {url}")]
    HttpStatus { url: String, status: u16 },

    /// Failed to read or write CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A required column is absent from the CSV header
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// Range value is not of the form "MIN-MAX"
    #[error("Invalid elector range '{0}': expected MIN-MAX")]
    RangeFormat(String),

    /// One side of a range value is not an unsigned integer
    #[error("Invalid elector range bound '{value}': {source}")]
    RangeBound {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using GedError
pub type Result<T> = std::result::Result<T, GedError>;
