//! Filtering of candidate profiles against structured criteria.
//!
//! This crate provides:
//! - Pure matching primitives (range overlap, skill sets, exact sets, substrings)
//! - The Filter trait and one implementation per criteria dimension
//! - FilterPipeline for composing filters
//! - FilterEngine, the entry point that normalizes criteria and runs the pipeline
//!
//! ## Semantics
//! A candidate is kept only if it passes every active filter. Dimensions the
//! criteria leave empty are inactive and accept everyone, so empty criteria
//! return the whole collection. Output keeps the input order.
//!
//! ## Example Usage
//! ```ignore
//! use criteria::FilterCriteria;
//! use pipeline::FilterEngine;
//!
//! let criteria = FilterCriteria::new()
//!     .with_skills(["java"])
//!     .with_institutions(["IIT", "MIT"])
//!     .with_experience(Some(2), None);
//!
//! let result = FilterEngine::new().apply(store.all(), &criteria);
//! println!("{} matches", result.len());
//! ```

pub mod traits;
pub mod matchers;
pub mod filters;
pub mod filter_pipeline;
pub mod engine;

#[cfg(test)]
mod test_support;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use engine::{apply, FilterEngine, MatchResult};
