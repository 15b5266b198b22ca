//! Searches against the bundled sample dataset.

use std::path::Path;
use std::sync::Arc;

use criteria::FilterCriteria;
use data_loader::CandidateStore;
use server::{InvalidRequest, SearchOrchestrator};
use translator::QueryTranslator;

fn sample_orchestrator() -> SearchOrchestrator {
    let store = CandidateStore::load_from_file(Path::new("../../data/candidates.csv"))
        .expect("sample dataset should load");
    SearchOrchestrator::new(Arc::new(store), QueryTranslator::default())
}

fn names<'a>(candidates: impl IntoIterator<Item = &'a data_loader::CandidateRecord>) -> Vec<&'a str> {
    candidates.into_iter().map(|c| c.name.as_str()).collect()
}

#[test]
fn test_natural_language_over_sample_data() {
    let orchestrator = sample_orchestrator();
    let response = orchestrator.natural_language_search(
        "Show me candidates from IIT or MIT with minimum 2 years of experience in java",
    );

    assert_eq!(
        names(&response.candidates),
        vec!["John Doe", "Priya Sharma", "Vikram Singh"]
    );
    assert_eq!(response.total_candidates, 3);
}

#[test]
fn test_response_json_shape() {
    let orchestrator = sample_orchestrator();
    let response = orchestrator.natural_language_search("docker and kubernetes experts");
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["query"], "docker and kubernetes experts");
    assert_eq!(json["parsed_query"], "Skills: docker, kubernetes");
    assert_eq!(json["total_candidates"], 2);
    assert_eq!(json["filter"]["skills"], serde_json::json!(["docker", "kubernetes"]));
    assert_eq!(json["filter"]["name"], "");
    assert!(json["candidates"][0]["companyName"].is_array());
}

#[test]
fn test_structured_filter_over_sample_data() {
    let orchestrator = sample_orchestrator();
    let criteria = FilterCriteria::new()
        .with_optional_skills(["react", "vue"])
        .with_experience(None, Some(3));

    let response = orchestrator.filter_candidates(&criteria).unwrap();
    assert_eq!(
        names(&response.candidates),
        vec!["John Doe", "Rahul Verma", "Sara Khan"]
    );
}

#[test]
fn test_invalid_phone_rejected() {
    let orchestrator = sample_orchestrator();
    let criteria = FilterCriteria::new().with_phone_number("call me");

    let err = orchestrator.filter_candidates(&criteria).unwrap_err();
    assert!(err.downcast_ref::<InvalidRequest>().is_some());
}
