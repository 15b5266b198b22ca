//! Simple test harness for the search orchestrator.
//!
//! Loads the sample dataset and runs a handful of structured and
//! natural-language searches, logging what each one returned.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use criteria::FilterCriteria;
use data_loader::CandidateStore;
use server::SearchOrchestrator;
use translator::QueryTranslator;

const SAMPLE_QUERIES: &[&str] = &[
    "Show me candidates from IIT or MIT with minimum 2 years of experience in java",
    "Find python developers with 3-5 years experience",
    "Candidates with react and nodejs skills from Google or Microsoft",
    "Show me candidates with docker and kubernetes skills",
];

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("info,server=debug,pipeline=debug,translator=debug")
        .init();

    info!("Starting candidate filter test harness");

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/candidates.csv".to_string());
    let store = CandidateStore::load_from_file(Path::new(&path))
        .with_context(|| format!("Failed to load candidates from {}", path))?;
    let orchestrator = SearchOrchestrator::new(Arc::new(store), QueryTranslator::default());

    let criteria = FilterCriteria::new()
        .with_skills(["java"])
        .with_experience(Some(2), None);
    let response = orchestrator.filter_candidates(&criteria)?;
    info!("Structured search returned {} candidates:", response.total_candidates);
    for candidate in &response.candidates {
        info!("  - {} ({})", candidate.name, candidate.institute_name);
    }

    for query in SAMPLE_QUERIES {
        let response = orchestrator.natural_language_search(query);
        info!("Query: '{}'", query);
        info!("  Parsed as: {}", response.parsed_query);
        info!("  Found {} candidates", response.total_candidates);
        for candidate in &response.candidates {
            info!(
                "  - {} ({}) - Skills: {}",
                candidate.name,
                candidate.institute_name,
                candidate.skills.join(", ")
            );
        }
    }

    Ok(())
}
