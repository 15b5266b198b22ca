//! Error types for the data-loader crate.
//!
//! - thiserror for defining custom error types
//! - Enum variants for the different ways a dataset can be rejected
//! - Error messages carry the file and line where the problem was found

use thiserror::Error;

/// Errors that can occur while loading and parsing the candidate dataset
///
/// The `#[derive(Error)]` macro from thiserror implements `std::error::Error`
/// and `Display` from our `#[error(...)]` attributes
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV reader rejected the input (bad quoting, ragged rows, missing header)
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Row in data file couldn't be parsed
    ///
    /// This variant stores context about where the error occurred
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: u64,
        reason: String,
    },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Data validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
