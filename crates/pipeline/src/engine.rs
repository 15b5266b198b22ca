//! The filter engine: normalize the criteria, then run every filter.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{
    CompanyFilter, CourseFilter, EmailFilter, ExperienceRangeFilter, InstitutionFilter,
    NameFilter, PhoneFilter, SkillsFilter,
};
use criteria::{normalize, FilterCriteria, NormalizedFilter};
use data_loader::CandidateRecord;
use serde::Serialize;

/// Candidates that satisfied a filter, plus the normalized filter that
/// selected them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MatchResult {
    pub candidates: Vec<CandidateRecord>,
    pub filter: NormalizedFilter,
}

impl MatchResult {
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Applies a `FilterCriteria` to a candidate collection.
///
/// A candidate is kept only if it satisfies every active dimension. The
/// engine is stateless between calls and can be shared across threads.
pub struct FilterEngine {
    pipeline: FilterPipeline,
}

impl FilterEngine {
    /// Engine with one filter per criteria dimension.
    ///
    /// Cheap exact checks come first so the set shrinks before the
    /// substring scans run.
    pub fn new() -> Self {
        let pipeline = FilterPipeline::new()
            .add_filter(ExperienceRangeFilter)
            .add_filter(SkillsFilter)
            .add_filter(InstitutionFilter)
            .add_filter(CourseFilter)
            .add_filter(CompanyFilter)
            .add_filter(NameFilter)
            .add_filter(EmailFilter)
            .add_filter(PhoneFilter);
        Self { pipeline }
    }

    pub fn with_pipeline(pipeline: FilterPipeline) -> Self {
        Self { pipeline }
    }

    /// Normalize `criteria` and return the matching candidates in input
    /// order.
    pub fn apply(&self, candidates: &[CandidateRecord], criteria: &FilterCriteria) -> MatchResult {
        self.apply_normalized(candidates, normalize(criteria))
    }

    /// Like `apply`, for a filter that is already normalized
    pub fn apply_normalized(
        &self,
        candidates: &[CandidateRecord],
        filter: NormalizedFilter,
    ) -> MatchResult {
        let kept: Vec<&CandidateRecord> = if filter.is_unconstrained() {
            candidates.iter().collect()
        } else {
            self.pipeline.apply(candidates.iter().collect(), &filter)
        };

        tracing::debug!(
            "Filter engine kept {} of {} candidates",
            kept.len(),
            candidates.len()
        );

        MatchResult {
            candidates: kept.into_iter().cloned().collect(),
            filter,
        }
    }

    /// Does one candidate satisfy `filter`?
    pub fn matches(&self, candidate: &CandidateRecord, filter: &NormalizedFilter) -> bool {
        self.pipeline.matches(candidate, filter)
    }

    pub fn filter_names(&self) -> Vec<&str> {
        self.pipeline.filter_names()
    }
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot helper around `FilterEngine::new().apply(..)`
pub fn apply(candidates: &[CandidateRecord], criteria: &FilterCriteria) -> MatchResult {
    FilterEngine::new().apply(candidates, criteria)
}
