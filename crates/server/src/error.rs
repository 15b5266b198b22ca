//! Errors surfaced by the search facade.

use criteria::ValidationError;
use thiserror::Error;

/// The request was rejected before any candidate was looked at
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid request: {}", summarize(.errors))]
pub struct InvalidRequest {
    pub errors: Vec<ValidationError>,
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
