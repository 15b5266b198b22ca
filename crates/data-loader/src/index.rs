//! CandidateStore loading and integrity checks.
//!
//! Steps performed when loading from disk:
//! 1. Parse the CSV file (rows converted in parallel)
//! 2. Insert records in file order
//! 3. Validate data integrity

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::path::Path;
use tracing::info;

impl CandidateStore {
    /// Load the candidate dataset from a CSV file
    ///
    /// This is the main entry point for loading data.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading candidates from {:?}", path);

        let records = parser::parse_candidates(path)?;

        let mut store = CandidateStore::new();
        for record in records {
            store.insert(record);
        }

        store.validate()?;

        info!("Loaded {} candidates", store.len());
        Ok(store)
    }

    /// Validate data integrity
    ///
    /// Check that:
    /// - Every candidate has a non-blank name
    /// - Every experience range has min <= max
    ///
    /// Records built in memory through `from_records`/`insert` skip the
    /// parser, so this runs on the whole store.
    pub fn validate(&self) -> Result<()> {
        for (position, candidate) in self.candidates.iter().enumerate() {
            if candidate.name.trim().is_empty() {
                return Err(DataLoadError::ValidationError(format!(
                    "candidate #{} has no name",
                    position + 1
                )));
            }
            if candidate.min_experience > candidate.max_experience {
                return Err(DataLoadError::InvalidValue {
                    field: format!("experience of {}", candidate.name),
                    value: format!("{}-{}", candidate.min_experience, candidate.max_experience),
                });
            }
        }
        Ok(())
    }
}
