//! Substring filters: name, email and phone.

use crate::matchers::contains_folded;
use crate::traits::Filter;
use criteria::NormalizedFilter;
use data_loader::CandidateRecord;

/// Case-insensitive substring match on the candidate name
pub struct NameFilter;

impl Filter for NameFilter {
    fn name(&self) -> &str {
        "NameFilter"
    }

    fn is_active(&self, filter: &NormalizedFilter) -> bool {
        filter.name.is_some()
    }

    fn matches(&self, candidate: &CandidateRecord, filter: &NormalizedFilter) -> bool {
        contains_folded(&candidate.name, filter.name.as_ref())
    }
}

/// Case-insensitive substring match on the email address
pub struct EmailFilter;

impl Filter for EmailFilter {
    fn name(&self) -> &str {
        "EmailFilter"
    }

    fn is_active(&self, filter: &NormalizedFilter) -> bool {
        filter.email.is_some()
    }

    fn matches(&self, candidate: &CandidateRecord, filter: &NormalizedFilter) -> bool {
        contains_folded(&candidate.email, filter.email.as_ref())
    }
}

/// Literal substring match on the phone number.
///
/// Formatting is not normalized: "+1-555" does not match "+15550101".
pub struct PhoneFilter;

impl Filter for PhoneFilter {
    fn name(&self) -> &str {
        "PhoneFilter"
    }

    fn is_active(&self, filter: &NormalizedFilter) -> bool {
        filter.phone_number.is_some()
    }

    fn matches(&self, candidate: &CandidateRecord, filter: &NormalizedFilter) -> bool {
        contains_folded(&candidate.phone_number, filter.phone_number.as_ref())
    }
}
