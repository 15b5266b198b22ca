//! Core domain types for the candidate dataset.
//!
//! This module defines the fundamental data structures used throughout the system:
//! - Type alias for experience years
//! - `CandidateRecord`, one row of the source data
//! - `CandidateStore`, the in-memory collection shared read-only by every request

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================

/// Whole years of professional experience
pub type Years = u32;

// =============================================================================
// Candidate Record
// =============================================================================

/// One candidate profile.
///
/// Records are immutable once loaded. Field names serialize with the same
/// names as the CSV header (`instituteName`, `minExperience`, ...), so a
/// record round-trips through the dataset format and JSON output alike.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecord {
    pub name: String,
    /// Primary skills
    pub skills: Vec<String>,
    /// Secondary skills; matched exactly like `skills`
    pub optional_skills: Vec<String>,
    pub institute_name: String,
    pub course: String,
    /// Lower end of the candidate's experience range (inclusive)
    pub min_experience: Years,
    /// Upper end of the candidate's experience range (inclusive)
    pub max_experience: Years,
    pub phone_number: String,
    pub email: String,
    /// Companies the candidate has worked for
    pub company_name: Vec<String>,
}

impl CandidateRecord {
    /// Experience as an inclusive `(min, max)` pair
    pub fn experience_range(&self) -> (Years, Years) {
        (self.min_experience, self.max_experience)
    }

    /// Iterate over primary and optional skills together
    pub fn all_skills(&self) -> impl Iterator<Item = &str> {
        self.skills
            .iter()
            .chain(self.optional_skills.iter())
            .map(String::as_str)
    }
}

// =============================================================================
// CandidateStore - The In-Memory Collection
// =============================================================================

/// Holds every loaded candidate in source order.
///
/// The store is built once at startup and then shared behind an `Arc`.
/// Nothing mutates it after loading, so concurrent readers need no locks.
#[derive(Debug, Clone)]
pub struct CandidateStore {
    pub(crate) candidates: Vec<CandidateRecord>,
}

impl CandidateStore {
    /// Creates a new, empty store
    pub fn new() -> Self {
        Self {
            candidates: Vec::new(),
        }
    }

    /// Build a store from records already in memory
    pub fn from_records(candidates: Vec<CandidateRecord>) -> Self {
        Self { candidates }
    }

    /// All candidates, in insertion order
    pub fn all(&self) -> &[CandidateRecord] {
        &self.candidates
    }

    /// Get a candidate by position
    pub fn get(&self, index: usize) -> Option<&CandidateRecord> {
        self.candidates.get(index)
    }

    /// Case-insensitive substring lookup on the candidate name
    pub fn find_by_name(&self, needle: &str) -> Vec<&CandidateRecord> {
        let needle = needle.trim().to_lowercase();
        self.candidates
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Append a candidate (used while loading)
    pub fn insert(&mut self, candidate: CandidateRecord) {
        self.candidates.push(candidate);
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl Default for CandidateStore {
    fn default() -> Self {
        Self::new()
    }
}
