//! Human-readable summaries of translated criteria.

use criteria::{normalize, FilterCriteria, NormalizedTerm};

/// Summary shown when the criteria constrain nothing
pub const NO_CRITERIA: &str = "No specific criteria (showing all candidates)";

fn join(terms: &[NormalizedTerm]) -> String {
    terms
        .iter()
        .map(|t| t.value.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render `criteria` as e.g.
/// `Skills: java | Institutions: IIT, MIT | Experience: at least 2 years`.
///
/// Blank and duplicate values are dropped first, the same way the engine
/// sees them.
pub fn interpret(criteria: &FilterCriteria) -> String {
    let filter = normalize(criteria);
    if filter.is_unconstrained() {
        return NO_CRITERIA.to_string();
    }

    let mut parts = Vec::new();
    if let Some(name) = &filter.name {
        parts.push(format!("Name: {}", name.value));
    }
    let lists = [
        ("Skills", &filter.skills),
        ("Optional skills", &filter.optional_skills),
        ("Institutions", &filter.institutions),
        ("Courses", &filter.courses),
        ("Companies", &filter.companies),
    ];
    for (label, terms) in lists {
        if !terms.is_empty() {
            parts.push(format!("{}: {}", label, join(terms)));
        }
    }
    match (filter.experience.min, filter.experience.max) {
        (Some(min), Some(max)) => parts.push(format!("Experience: {}-{} years", min, max)),
        (Some(min), None) => parts.push(format!("Experience: at least {} years", min)),
        (None, Some(max)) => parts.push(format!("Experience: at most {} years", max)),
        (None, None) => {}
    }
    if let Some(email) = &filter.email {
        parts.push(format!("Email: {}", email.value));
    }
    if let Some(phone) = &filter.phone_number {
        parts.push(format!("Phone: {}", phone.value));
    }

    parts.join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpret_full() {
        let criteria = FilterCriteria::new()
            .with_skills(["java"])
            .with_institutions(["IIT", "MIT"])
            .with_experience(Some(2), None);

        assert_eq!(
            interpret(&criteria),
            "Skills: java | Institutions: IIT, MIT | Experience: at least 2 years"
        );
    }

    #[test]
    fn test_interpret_range_and_company() {
        let criteria = FilterCriteria::new()
            .with_companies(["Google", "Microsoft"])
            .with_experience(Some(3), Some(5));

        assert_eq!(
            interpret(&criteria),
            "Companies: Google, Microsoft | Experience: 3-5 years"
        );
    }

    #[test]
    fn test_interpret_empty() {
        assert_eq!(interpret(&FilterCriteria::default()), NO_CRITERIA);
        assert_eq!(interpret(&FilterCriteria::new().with_skills([" "])), NO_CRITERIA);
    }
}
