//! Server crate for the candidate filter.
//!
//! This crate contains the orchestrator that ties the candidate store,
//! the filter engine and the query translator together behind two
//! request shapes: structured criteria and natural-language queries.

pub mod error;
pub mod orchestrator;

pub use error::InvalidRequest;
pub use orchestrator::{FilterResponse, NaturalLanguageResponse, SearchOrchestrator};
