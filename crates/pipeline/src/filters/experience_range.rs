//! Filter on the overlap between the candidate's experience range and the
//! requested one.

use crate::matchers::ranges_overlap;
use crate::traits::Filter;
use criteria::NormalizedFilter;
use data_loader::CandidateRecord;

/// Keeps candidates whose experience range shares at least one year with
/// the query range.
///
/// ## Algorithm
/// Standard interval overlap, with a missing query bound treated as open.
/// A candidate with 2-5 years matches a query of "at least 4" and a query
/// of "1-2", but not "6-10".
pub struct ExperienceRangeFilter;

impl Filter for ExperienceRangeFilter {
    fn name(&self) -> &str {
        "ExperienceRangeFilter"
    }

    fn is_active(&self, filter: &NormalizedFilter) -> bool {
        !filter.experience.is_unbounded()
    }

    fn matches(&self, candidate: &CandidateRecord, filter: &NormalizedFilter) -> bool {
        let (min, max) = candidate.experience_range();
        ranges_overlap(min, max, filter.experience.min, filter.experience.max)
    }
}
