//! Storage error types

use thiserror::Error;

/// Errors that can occur while reading or writing the CSV files
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file could not be opened or created
    #[error("Cannot access {path}: {reason}")]
    Io { path: String, reason: String },

    /// Malformed CSV or a row that does not fit the expected columns
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A policy row names an insurance type outside the supported set
    #[error("Unknown insurance type {value:?} on line {line}")]
    UnknownInsuranceType { line: u64, value: String },

    /// Exported bytes were not valid UTF-8
    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl StoreError {
    /// Builds an `Io` error for `path`
    pub fn io(path: impl std::fmt::Display, error: impl std::fmt::Display) -> Self {
        StoreError::Io {
            path: path.to_string(),
            reason: error.to_string(),
        }
    }
}
