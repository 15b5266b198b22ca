//! Builds a `NormalizedFilter` from raw `FilterCriteria`.
//!
//! This is the "context builder" step of a request: gather and clean
//! everything once up front so the per-candidate matchers only compare
//! pre-folded strings.

use crate::types::{FilterCriteria, NormalizedFilter, NormalizedTerm};
use std::collections::HashSet;

/// Normalize criteria for matching
///
/// - Scalar strings are trimmed; a blank value becomes `None`
/// - List items are trimmed, blanks dropped, and duplicates removed
///   case-insensitively, keeping the first spelling seen
/// - Experience bounds pass through unchanged (no range validation here)
///
/// Never fails.
pub fn normalize(criteria: &FilterCriteria) -> NormalizedFilter {
    NormalizedFilter {
        name: normalize_scalar(criteria.name.as_deref()),
        skills: normalize_list(&criteria.skills),
        optional_skills: normalize_list(&criteria.optional_skills),
        institutions: normalize_list(&criteria.institutions),
        courses: normalize_list(&criteria.courses),
        experience: criteria.experience(),
        phone_number: normalize_scalar(criteria.phone_number.as_deref()),
        email: normalize_scalar(criteria.email.as_deref()),
        companies: normalize_list(&criteria.companies),
    }
}

impl From<&FilterCriteria> for NormalizedFilter {
    fn from(criteria: &FilterCriteria) -> Self {
        normalize(criteria)
    }
}

fn normalize_scalar(value: Option<&str>) -> Option<NormalizedTerm> {
    value.and_then(NormalizedTerm::new)
}

fn normalize_list(values: &[String]) -> Vec<NormalizedTerm> {
    let mut seen = HashSet::new();
    values
        .iter()
        .filter_map(|v| NormalizedTerm::new(v))
        .filter(|term| seen.insert(term.folded.clone()))
        .collect()
}
