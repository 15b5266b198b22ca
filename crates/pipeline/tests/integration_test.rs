//! Integration tests for the filter engine.

use criteria::FilterCriteria;
use data_loader::{CandidateRecord, Years};
use pipeline::FilterEngine;

fn profile(
    name: &str,
    skills: &[&str],
    optional_skills: &[&str],
    institute: &str,
    experience: (Years, Years),
    companies: &[&str],
) -> CandidateRecord {
    let strings = |values: &[&str]| values.iter().map(|v| v.to_string()).collect::<Vec<_>>();
    CandidateRecord {
        name: name.to_string(),
        skills: strings(skills),
        optional_skills: strings(optional_skills),
        institute_name: institute.to_string(),
        course: "Computer Science".to_string(),
        min_experience: experience.0,
        max_experience: experience.1,
        phone_number: "+1-555-0101".to_string(),
        email: format!("{}@email.com", name.to_lowercase().replace(' ', ".")),
        company_name: strings(companies),
    }
}

fn sample_pool() -> Vec<CandidateRecord> {
    vec![
        profile("John Doe", &["java", "python"], &["react"], "MIT", (2, 5), &["Google"]),
        profile("Priya Sharma", &["java", "spring"], &[], "IIT", (1, 3), &["TCS", "Infosys"]),
        profile("Jane Smith", &["python", "sql"], &["docker"], "Stanford", (6, 9), &["Microsoft"]),
        profile("Rahul Verma", &["javascript", "react"], &[], "IIT Delhi", (0, 2), &["Wipro"]),
    ]
}

fn names(result: &pipeline::MatchResult) -> Vec<&str> {
    result.candidates.iter().map(|c| c.name.as_str()).collect()
}

#[test]
fn test_institution_skill_and_experience_combined() {
    let pool = sample_pool();
    let criteria = FilterCriteria::new()
        .with_skills(["java"])
        .with_institutions(["IIT", "MIT"])
        .with_experience(Some(2), None);

    let result = FilterEngine::new().apply(&pool, &criteria);

    assert_eq!(names(&result), vec!["John Doe", "Priya Sharma"]);
}

#[test]
fn test_experience_overlap_not_containment() {
    let pool = sample_pool();
    let criteria = FilterCriteria::new().with_experience(Some(4), Some(6));

    let result = FilterEngine::new().apply(&pool, &criteria);

    // 2-5 and 6-9 both touch the 4-6 window
    assert_eq!(names(&result), vec!["John Doe", "Jane Smith"]);
}

#[test]
fn test_inverted_query_range_matches_nothing() {
    let pool = sample_pool();
    let criteria = FilterCriteria::new().with_experience(Some(10), Some(5));

    let result = FilterEngine::new().apply(&pool, &criteria);

    assert!(result.is_empty());
}

#[test]
fn test_java_does_not_match_javascript() {
    let pool = sample_pool();
    let criteria = FilterCriteria::new().with_skills(["Java"]);

    let result = FilterEngine::new().apply(&pool, &criteria);

    assert!(!names(&result).contains(&"Rahul Verma"));
    assert_eq!(result.len(), 2);
}

#[test]
fn test_optional_skills_match_either_profile_list() {
    let pool = sample_pool();
    let criteria = FilterCriteria::new().with_optional_skills(["docker", "spring"]);

    let result = FilterEngine::new().apply(&pool, &criteria);

    assert_eq!(names(&result), vec!["Priya Sharma", "Jane Smith"]);
}

#[test]
fn test_company_and_name_substring() {
    let pool = sample_pool();
    let criteria = FilterCriteria::new()
        .with_companies(["infosys"])
        .with_name("sharma");

    let result = FilterEngine::new().apply(&pool, &criteria);

    assert_eq!(names(&result), vec!["Priya Sharma"]);
}

#[test]
fn test_email_is_case_insensitive() {
    let pool = sample_pool();
    let criteria = FilterCriteria::new().with_email("JANE.SMITH@");

    let result = FilterEngine::new().apply(&pool, &criteria);

    assert_eq!(names(&result), vec!["Jane Smith"]);
}

#[test]
fn test_empty_criteria_returns_pool_in_order() {
    let pool = sample_pool();

    let result = FilterEngine::new().apply(&pool, &FilterCriteria::default());

    assert_eq!(result.candidates, pool);
}

#[test]
fn test_result_serializes_candidates_and_filter() {
    let pool = sample_pool();
    let criteria = FilterCriteria::new().with_skills(["python"]);

    let result = FilterEngine::new().apply(&pool, &criteria);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["candidates"].as_array().unwrap().len(), 2);
    assert_eq!(json["filter"]["skills"][0], "python");
    assert_eq!(json["candidates"][0]["instituteName"], "MIT");
}
