//! Fixture helpers shared by the unit tests.

use data_loader::{CandidateRecord, Years};

pub fn candidate(name: &str, skills: &[&str], min: Years, max: Years) -> CandidateRecord {
    CandidateRecord {
        name: name.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        min_experience: min,
        max_experience: max,
        ..Default::default()
    }
}
