//! End-to-end translation tests over the built-in dictionaries.

use criteria::FilterCriteria;
use data_loader::CandidateRecord;
use pipeline::FilterEngine;
use proptest::prelude::*;
use translator::{interpret, QueryTranslator, NO_CRITERIA};

#[test]
fn test_institutions_skill_and_minimum() {
    let translator = QueryTranslator::default();
    let criteria = translator.translate(
        "Show me candidates from IIT or MIT with minimum 2 years of experience in java",
    );

    assert_eq!(criteria.institutions, vec!["IIT", "MIT"]);
    assert_eq!(criteria.skills, vec!["java"]);
    assert_eq!(criteria.min_experience, Some(2));
    assert_eq!(criteria.max_experience, None);
    assert!(criteria.companies.is_empty());
    assert!(criteria.courses.is_empty());
}

#[test]
fn test_nothing_recognizable() {
    let translator = QueryTranslator::default();
    let criteria = translator.translate("no recognizable terms here");

    assert!(criteria.is_empty());
    assert_eq!(interpret(&criteria), NO_CRITERIA);

    let pool = vec![
        CandidateRecord {
            name: "A".to_string(),
            ..Default::default()
        },
        CandidateRecord {
            name: "B".to_string(),
            ..Default::default()
        },
    ];
    let result = FilterEngine::new().apply(&pool, &criteria);
    assert_eq!(result.len(), 2);
}

#[test]
fn test_range_query() {
    let translator = QueryTranslator::default();
    let criteria = translator.translate("Find python developers with 3-5 years experience");

    assert_eq!(criteria.skills, vec!["python"]);
    assert_eq!(criteria.min_experience, Some(3));
    assert_eq!(criteria.max_experience, Some(5));
}

#[test]
fn test_companies_and_skills_in_text_order() {
    let translator = QueryTranslator::default();
    let criteria =
        translator.translate("Candidates with react and nodejs skills from Google or Microsoft");

    assert_eq!(criteria.skills, vec!["react", "nodejs"]);
    assert_eq!(criteria.companies, vec!["Google", "Microsoft"]);
}

#[test]
fn test_aliases_emit_canonical_terms() {
    let translator = QueryTranslator::default();
    let criteria = translator.translate("ML engineers who know K8S and Kubernetes");

    assert_eq!(criteria.skills, vec!["machine learning", "kubernetes"]);
}

#[test]
fn test_course_and_multi_word_skill() {
    let translator = QueryTranslator::default();
    let criteria = translator
        .translate("Candidates from MIT or Stanford with computer science degree and machine learning");

    assert_eq!(criteria.institutions, vec!["MIT", "Stanford"]);
    assert_eq!(criteria.courses, vec!["Computer Science"]);
    assert_eq!(criteria.skills, vec!["machine learning"]);
}

#[test]
fn test_java_not_found_inside_javascript() {
    let translator = QueryTranslator::default();
    let criteria = translator.translate("Find javascript developers with 1-4 years experience from startups");

    assert_eq!(criteria.skills, vec!["javascript"]);
    assert_eq!(criteria.min_experience, Some(1));
    assert_eq!(criteria.max_experience, Some(4));
}

#[test]
fn test_either_or_skills_are_all_mandatory() {
    let translator = QueryTranslator::default();
    let criteria = translator.translate("Python or java developers with minimum 2 years experience");

    assert_eq!(criteria.skills, vec!["python", "java"]);
    assert!(criteria.optional_skills.is_empty());
}

#[test]
fn test_whitespace_runs_inside_multi_word_terms() {
    let translator = QueryTranslator::default();
    let criteria = translator.translate("graduates of IIT  Delhi with machine\nlearning");

    assert_eq!(criteria.institutions, vec!["IIT Delhi"]);
    assert_eq!(criteria.skills, vec!["machine learning"]);
}

#[test]
fn test_tab_separated_terms_and_experience() {
    let translator = QueryTranslator::default();
    let criteria = translator.translate("Computer\tScience grads, at\n least  3 years");

    assert_eq!(criteria.courses, vec!["Computer Science"]);
    assert_eq!(criteria.min_experience, Some(3));
}

#[test]
fn test_punctuated_terms() {
    let translator = QueryTranslator::default();
    let criteria = translator.translate("C++ and c# devs with a B.Tech");

    assert_eq!(criteria.skills, vec!["c++", "c#"]);
    assert_eq!(criteria.courses, vec!["B.Tech"]);
}

#[test]
fn test_translated_criteria_drive_the_engine() {
    let translator = QueryTranslator::default();
    let criteria = translator.translate("java developers from IIT with at least 3 years");

    let pool = vec![
        CandidateRecord {
            name: "Match".to_string(),
            skills: vec!["Java".to_string()],
            institute_name: "IIT".to_string(),
            min_experience: 2,
            max_experience: 4,
            ..Default::default()
        },
        CandidateRecord {
            name: "Too junior".to_string(),
            skills: vec!["java".to_string()],
            institute_name: "IIT".to_string(),
            min_experience: 0,
            max_experience: 2,
            ..Default::default()
        },
    ];

    let result = FilterEngine::new().apply(&pool, &criteria);
    assert_eq!(result.len(), 1);
    assert_eq!(result.candidates[0].name, "Match");
}

proptest! {
    #[test]
    fn translation_is_deterministic(query in "[a-zA-Z0-9 +.#-]{0,60}") {
        let translator = QueryTranslator::default();
        let first: FilterCriteria = translator.translate(&query);
        let second = translator.translate(&query);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn translation_never_panics_on_unicode(query in "\\PC{0,80}") {
        let translator = QueryTranslator::default();
        let _ = translator.translate(&query);
    }
}
