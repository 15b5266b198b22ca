//! # Data Loader Crate
//!
//! This crate loads the candidate profile dataset into memory.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (CandidateRecord, CandidateStore)
//! - **parser**: Parse the CSV file into Rust structs
//! - **index**: Build and validate the in-memory store
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::CandidateStore;
//! use std::path::Path;
//!
//! let store = CandidateStore::load_from_file(Path::new("data/candidates.csv"))?;
//!
//! for candidate in store.all() {
//!     println!("{} ({})", candidate.name, candidate.institute_name);
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{CandidateRecord, CandidateStore, Years};
