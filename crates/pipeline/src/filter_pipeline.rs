//! The FilterPipeline orchestrates multiple filters.
//!
//! Filters are chained with the builder pattern and run in insertion
//! order. Since every filter is a pure predicate the order never changes
//! the result, only how quickly the set shrinks.

use crate::traits::Filter;
use criteria::NormalizedFilter;
use data_loader::CandidateRecord;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(SkillsFilter)
///     .add_filter(ExperienceRangeFilter);
///
/// let kept = pipeline.apply(store.all().iter().collect(), &filter);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence to the candidates.
    ///
    /// ## Algorithm
    /// 1. Start with the input candidates
    /// 2. For each filter that `filter` activates:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return the surviving candidates in their original order
    pub fn apply<'a>(
        &self,
        candidates: Vec<&'a CandidateRecord>,
        filter: &NormalizedFilter,
    ) -> Vec<&'a CandidateRecord> {
        let mut current = candidates;
        for stage in &self.filters {
            if !stage.is_active(filter) {
                continue;
            }
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                stage.name(),
                current.len()
            );
            current = stage.apply(current, filter);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                stage.name(),
                current.len()
            );
            if current.is_empty() {
                break;
            }
        }
        current
    }

    /// Does a single candidate pass every filter?
    pub fn matches(&self, candidate: &CandidateRecord, filter: &NormalizedFilter) -> bool {
        self.filters
            .iter()
            .all(|stage| !stage.is_active(filter) || stage.matches(candidate, filter))
    }

    /// Names of the registered filters, in run order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{ExperienceRangeFilter, SkillsFilter};
    use crate::test_support::candidate;
    use criteria::{normalize, FilterCriteria};

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let a = candidate("A", &["java"], 1, 2);
        let b = candidate("B", &["python"], 3, 4);

        let filter = normalize(&FilterCriteria::new().with_skills(["java"]));
        let kept = pipeline.apply(vec![&a, &b], &filter);
        assert_eq!(kept.len(), 2);
        assert!(pipeline.is_empty());
    }

    #[test]
    fn test_filters_compose() {
        let a = candidate("A", &["java"], 0, 1);
        let b = candidate("B", &["java"], 3, 4);
        let c = candidate("C", &["python"], 3, 4);

        let pipeline = FilterPipeline::new()
            .add_filter(SkillsFilter)
            .add_filter(ExperienceRangeFilter);

        let filter = normalize(
            &FilterCriteria::new()
                .with_skills(["java"])
                .with_experience(Some(2), None),
        );
        let kept = pipeline.apply(vec![&a, &b, &c], &filter);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "B");
        assert!(pipeline.matches(&b, &filter));
        assert!(!pipeline.matches(&c, &filter));
        assert_eq!(
            pipeline.filter_names(),
            vec!["SkillsFilter", "ExperienceRangeFilter"]
        );
    }
}
