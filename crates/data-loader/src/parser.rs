//! Parser for the candidate CSV file.
//!
//! Expected header:
//!
//! ```text
//! name,skills,optionalSkills,instituteName,course,minExperience,maxExperience,phoneNumber,email,companyName
//! ```
//!
//! List columns (`skills`, `optionalSkills`, `companyName`) hold
//! `;`-separated values. Every cell is trimmed and blank list items are
//! dropped.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use csv::{ReaderBuilder, StringRecord, Trim};
use rayon::prelude::*;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Separator used inside list cells
pub const LIST_SEPARATOR: char = ';';

/// Raw CSV row before type conversion.
///
/// Experience is kept as text here so a bad number can be reported with
/// the line it came from instead of a bare serde message.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CandidateRow {
    name: String,
    #[serde(default)]
    skills: String,
    #[serde(default)]
    optional_skills: String,
    #[serde(default)]
    institute_name: String,
    #[serde(default)]
    course: String,
    min_experience: String,
    max_experience: String,
    #[serde(default)]
    phone_number: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    company_name: String,
}

/// Parse a candidates CSV file from disk
pub fn parse_candidates(path: &Path) -> Result<Vec<CandidateRecord>> {
    if !path.exists() {
        return Err(DataLoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let file = File::open(path)?;
    let source = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    parse_candidates_from_reader(file, &source)
}

/// Parse candidates from any reader
///
/// `source` names the input in error messages.
pub fn parse_candidates_from_reader<R: Read>(reader: R, source: &str) -> Result<Vec<CandidateRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(false)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    // Read line by line, remembering where each row came from
    let mut rows: Vec<(u64, StringRecord)> = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        if record.iter().all(|cell| cell.is_empty()) {
            continue; // Skip empty lines
        }
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        rows.push((line, record));
    }

    // Convert rows in parallel; collect keeps the original order and
    // stops at the first error
    rows.into_par_iter()
        .map(|(line, record)| {
            let row: CandidateRow = record
                .deserialize(Some(&headers))
                .map_err(|e| DataLoadError::ParseError {
                    file: source.to_string(),
                    line,
                    reason: e.to_string(),
                })?;
            row_to_record(row, source, line)
        })
        .collect()
}

/// Convert a raw row into a typed record
fn row_to_record(row: CandidateRow, source: &str, line: u64) -> Result<CandidateRecord> {
    if row.name.is_empty() {
        return Err(DataLoadError::ParseError {
            file: source.to_string(),
            line,
            reason: "Missing name".to_string(),
        });
    }

    let min_experience = parse_years(&row.min_experience, "minExperience", source, line)?;
    let max_experience = parse_years(&row.max_experience, "maxExperience", source, line)?;
    if min_experience > max_experience {
        return Err(DataLoadError::InvalidValue {
            field: "experience".to_string(),
            value: format!("{}-{} (line {})", min_experience, max_experience, line),
        });
    }

    Ok(CandidateRecord {
        name: row.name,
        skills: split_list(&row.skills),
        optional_skills: split_list(&row.optional_skills),
        institute_name: row.institute_name,
        course: row.course,
        min_experience,
        max_experience,
        phone_number: row.phone_number,
        email: row.email,
        company_name: split_list(&row.company_name),
    })
}

fn parse_years(value: &str, field: &str, source: &str, line: u64) -> Result<Years> {
    value.parse().map_err(|e| DataLoadError::ParseError {
        file: source.to_string(),
        line,
        reason: format!("Invalid {} '{}': {}", field, value, e),
    })
}

/// Split a `;`-separated cell into trimmed, non-empty items
///
/// Example: "java; python;;sql" -> ["java", "python", "sql"]
fn split_list(cell: &str) -> Vec<String> {
    cell.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
