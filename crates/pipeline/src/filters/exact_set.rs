//! Exact-set filters: institution, course and company.
//!
//! The candidate passes when one of its values equals one of the query
//! values, ignoring case. "IIT" does not match "IIT Delhi".

use crate::matchers::matches_any_exact;
use crate::traits::Filter;
use criteria::NormalizedFilter;
use data_loader::CandidateRecord;

/// Keeps candidates from one of the requested institutions
pub struct InstitutionFilter;

impl Filter for InstitutionFilter {
    fn name(&self) -> &str {
        "InstitutionFilter"
    }

    fn is_active(&self, filter: &NormalizedFilter) -> bool {
        !filter.institutions.is_empty()
    }

    fn matches(&self, candidate: &CandidateRecord, filter: &NormalizedFilter) -> bool {
        matches_any_exact([candidate.institute_name.as_str()], &filter.institutions)
    }
}

/// Keeps candidates who studied one of the requested courses
pub struct CourseFilter;

impl Filter for CourseFilter {
    fn name(&self) -> &str {
        "CourseFilter"
    }

    fn is_active(&self, filter: &NormalizedFilter) -> bool {
        !filter.courses.is_empty()
    }

    fn matches(&self, candidate: &CandidateRecord, filter: &NormalizedFilter) -> bool {
        matches_any_exact([candidate.course.as_str()], &filter.courses)
    }
}

/// Keeps candidates who worked at any of the requested companies
pub struct CompanyFilter;

impl Filter for CompanyFilter {
    fn name(&self) -> &str {
        "CompanyFilter"
    }

    fn is_active(&self, filter: &NormalizedFilter) -> bool {
        !filter.companies.is_empty()
    }

    fn matches(&self, candidate: &CandidateRecord, filter: &NormalizedFilter) -> bool {
        matches_any_exact(
            candidate.company_name.iter().map(String::as_str),
            &filter.companies,
        )
    }
}
