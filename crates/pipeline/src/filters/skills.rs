//! Filter on mandatory (AND) and optional (OR) skill sets.

use crate::matchers::skills_match;
use crate::traits::Filter;
use criteria::NormalizedFilter;
use data_loader::CandidateRecord;

/// Keeps candidates that have every mandatory skill and at least one of
/// the optional skills.
///
/// ## Algorithm
/// Both query lists are checked against the union of the candidate's
/// `skills` and `optional_skills`; a skill listed as optional on the
/// profile still satisfies a mandatory requirement.
pub struct SkillsFilter;

impl Filter for SkillsFilter {
    fn name(&self) -> &str {
        "SkillsFilter"
    }

    fn is_active(&self, filter: &NormalizedFilter) -> bool {
        !filter.skills.is_empty() || !filter.optional_skills.is_empty()
    }

    fn matches(&self, candidate: &CandidateRecord, filter: &NormalizedFilter) -> bool {
        skills_match(
            &candidate.skills,
            &candidate.optional_skills,
            &filter.skills,
            &filter.optional_skills,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::candidate;
    use criteria::{normalize, FilterCriteria};

    #[test]
    fn test_skills_filter() {
        let backend = candidate("Backend", &["java", "spring"], 2, 5);
        let data = candidate("Data", &["python", "sql"], 2, 5);
        let full_stack = candidate("FullStack", &["java", "react"], 2, 5);

        let filter = normalize(
            &FilterCriteria::new()
                .with_skills(["JAVA"])
                .with_optional_skills(["react", "docker"]),
        );
        let kept = SkillsFilter.apply(vec![&backend, &data, &full_stack], &filter);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "FullStack");
    }
}
