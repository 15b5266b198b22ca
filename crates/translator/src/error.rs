//! Error types for the translator crate.

use thiserror::Error;

/// Errors raised while loading keyword dictionaries.
///
/// Translation itself never fails; these only come from configuration.
#[derive(Error, Debug)]
pub enum TranslatorError {
    #[error("Dictionary file not found: {path}")]
    FileNotFound { path: String },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid dictionary JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TranslatorError>;
