//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to candidate sets.

use criteria::NormalizedFilter;
use data_loader::CandidateRecord;

/// Core trait for filtering candidates.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across concurrent requests
/// - `matches` is the per-candidate predicate; `apply` runs it over a batch
/// - Filters work on borrowed records, so nothing is cloned until the final
///   result is assembled
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `filter` constrains the dimension this filter looks at.
    ///
    /// An inactive filter must accept every candidate.
    fn is_active(&self, filter: &NormalizedFilter) -> bool;

    /// Decide whether a single candidate passes.
    fn matches(&self, candidate: &CandidateRecord, filter: &NormalizedFilter) -> bool;

    /// Apply this filter to a set of candidates, keeping their order.
    fn apply<'a>(
        &self,
        candidates: Vec<&'a CandidateRecord>,
        filter: &NormalizedFilter,
    ) -> Vec<&'a CandidateRecord> {
        if !self.is_active(filter) {
            return candidates;
        }
        candidates
            .into_iter()
            .filter(|candidate| self.matches(candidate, filter))
            .collect()
    }
}
