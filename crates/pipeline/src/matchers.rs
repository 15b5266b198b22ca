//! Pure matching primitives used by the filters.
//!
//! Query-side strings arrive already trimmed and case-folded inside
//! `NormalizedTerm`s; candidate-side strings are folded here at
//! comparison time.

use criteria::NormalizedTerm;
use data_loader::Years;
use std::collections::HashSet;

/// Do two inclusive integer ranges share at least one point?
///
/// Absent query bounds are open, and a query with neither bound accepts
/// every candidate. Otherwise an inverted range on either side
/// (`min > max`) matches nothing.
///
/// # Examples
/// ```
/// use pipeline::matchers::ranges_overlap;
///
/// assert!(ranges_overlap(2, 5, Some(1), Some(6)));
/// assert!(!ranges_overlap(2, 5, Some(6), Some(10)));
/// assert!(ranges_overlap(3, 3, Some(2), None));
/// ```
pub fn ranges_overlap(
    candidate_min: Years,
    candidate_max: Years,
    query_min: Option<Years>,
    query_max: Option<Years>,
) -> bool {
    if query_min.is_none() && query_max.is_none() {
        return true;
    }
    let query_min = query_min.unwrap_or(Years::MIN);
    let query_max = query_max.unwrap_or(Years::MAX);

    if candidate_min > candidate_max || query_min > query_max {
        return false;
    }
    candidate_min <= query_max && candidate_max >= query_min
}

/// Mandatory skills use AND semantics, optional skills OR semantics, both
/// against the union of the candidate's skills and optional skills.
///
/// Comparison is whole-token and case-insensitive: "java" does not match
/// "javascript". An empty query list is always satisfied.
pub fn skills_match(
    candidate_skills: &[String],
    candidate_optional_skills: &[String],
    query_mandatory: &[NormalizedTerm],
    query_optional: &[NormalizedTerm],
) -> bool {
    if query_mandatory.is_empty() && query_optional.is_empty() {
        return true;
    }

    let owned: HashSet<String> = candidate_skills
        .iter()
        .chain(candidate_optional_skills)
        .map(|s| s.trim().to_lowercase())
        .collect();

    let has_all_mandatory = query_mandatory
        .iter()
        .all(|skill| owned.contains(&skill.folded));
    let has_any_optional = query_optional.is_empty()
        || query_optional
            .iter()
            .any(|skill| owned.contains(&skill.folded));

    has_all_mandatory && has_any_optional
}

/// Exact-set mode: any candidate value equals any query term, ignoring case.
///
/// An empty query set is always satisfied.
pub fn matches_any_exact<'a, I>(candidate_values: I, query: &[NormalizedTerm]) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    if query.is_empty() {
        return true;
    }
    candidate_values.into_iter().any(|value| {
        let folded = value.trim().to_lowercase();
        query.iter().any(|term| term.folded == folded)
    })
}

/// Substring mode: the candidate value contains the query, ignoring case.
///
/// No query means no constraint. Matching is literal: punctuation and
/// spacing in phone numbers are compared as-is.
pub fn contains_folded(candidate_value: &str, query: Option<&NormalizedTerm>) -> bool {
    match query {
        Some(term) => candidate_value.to_lowercase().contains(&term.folded),
        None => true,
    }
}
