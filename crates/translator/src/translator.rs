//! Natural-language query translation.
//!
//! `QueryTranslator` turns text such as "python developers from IIT with
//! minimum 2 years" into `FilterCriteria` by spotting dictionary terms and
//! experience phrases. Unrecognized words are ignored and the translator
//! never fails on arbitrary input.

use crate::dictionary::{Category, KeywordDictionaries};
use crate::experience::extract_experience;
use criteria::FilterCriteria;
use std::cmp::Reverse;
use std::sync::Arc;

/// One spelling of a dictionary entry, folded for matching
#[derive(Debug, Clone)]
struct Spelling {
    folded: String,
    entry: usize,
}

/// Precomputed lookup for one category
#[derive(Debug, Clone)]
struct CategoryMatcher {
    category: Category,
    canonical: Vec<String>,
    spellings: Vec<Spelling>,
}

/// A spelling found in the text
#[derive(Debug, Clone, Copy)]
struct Hit {
    start: usize,
    end: usize,
    entry: usize,
}

impl CategoryMatcher {
    fn build(category: Category, dictionaries: &KeywordDictionaries) -> Self {
        let mut canonical = Vec::new();
        let mut spellings = Vec::new();

        for entry in dictionaries.entries(category) {
            let term = entry.term.trim();
            if term.is_empty() {
                tracing::warn!("Dropping {} entry with a blank term", category);
                continue;
            }
            let index = canonical.len();
            canonical.push(term.to_string());

            for spelling in entry.spellings() {
                let folded = fold(spelling);
                if folded.is_empty() {
                    tracing::warn!("Dropping blank alias of {} '{}'", category, term);
                    continue;
                }
                spellings.push(Spelling { folded, entry: index });
            }
        }

        Self {
            category,
            canonical,
            spellings,
        }
    }

    /// Canonical terms found in `folded`, in order of first appearance.
    ///
    /// Overlapping hits resolve to the earliest start, then the longest
    /// spelling, so "IIT Delhi" is one institution rather than two.
    fn find(&self, folded: &str) -> Vec<String> {
        let mut hits: Vec<Hit> = Vec::new();
        for spelling in &self.spellings {
            for (start, matched) in folded.match_indices(spelling.folded.as_str()) {
                let end = start + matched.len();
                if is_word_boundary(folded, start, end) {
                    hits.push(Hit {
                        start,
                        end,
                        entry: spelling.entry,
                    });
                }
            }
        }
        hits.sort_by_key(|h| (h.start, Reverse(h.end - h.start), h.entry));

        let mut seen = vec![false; self.canonical.len()];
        let mut found = Vec::new();
        let mut taken_until = 0;
        for hit in hits {
            if hit.start < taken_until {
                continue;
            }
            taken_until = hit.end;
            if !seen[hit.entry] {
                seen[hit.entry] = true;
                found.push(self.canonical[hit.entry].clone());
            }
        }
        found
    }
}

/// Lowercase `text` and collapse every whitespace run to a single space.
///
/// Queries and dictionary spellings both go through this, so "IIT  Delhi"
/// and "machine\nlearning" line up with their single-spaced spellings.
fn fold(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Any non-alphanumeric character (or either end of the text) separates words
fn is_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}

/// Translates free-text queries into structured criteria.
///
/// Cheap to clone; the dictionaries sit behind an `Arc`.
#[derive(Debug, Clone)]
pub struct QueryTranslator {
    dictionaries: Arc<KeywordDictionaries>,
    matchers: Arc<Vec<CategoryMatcher>>,
}

impl QueryTranslator {
    pub fn new(dictionaries: Arc<KeywordDictionaries>) -> Self {
        let matchers = Category::ALL
            .iter()
            .map(|category| CategoryMatcher::build(*category, &dictionaries))
            .collect();

        Self {
            dictionaries,
            matchers: Arc::new(matchers),
        }
    }

    pub fn dictionaries(&self) -> &KeywordDictionaries {
        &self.dictionaries
    }

    /// Translate `query` into criteria.
    ///
    /// Recognized skills all land in the mandatory set. Text with nothing
    /// recognizable yields empty criteria.
    pub fn translate(&self, query: &str) -> FilterCriteria {
        let folded = fold(query);
        let mut criteria = FilterCriteria::new();

        for matcher in self.matchers.iter() {
            let terms = matcher.find(&folded);
            if terms.is_empty() {
                continue;
            }
            tracing::debug!("Recognized {} terms: {:?}", matcher.category, terms);
            match matcher.category {
                Category::Skill => criteria.skills = terms,
                Category::Institution => criteria.institutions = terms,
                Category::Company => criteria.companies = terms,
                Category::Course => criteria.courses = terms,
            }
        }

        let experience = extract_experience(&folded);
        if experience.min.is_some() || experience.max.is_some() {
            tracing::debug!(
                "Recognized experience bounds: min={:?} max={:?}",
                experience.min,
                experience.max
            );
        }
        criteria.min_experience = experience.min;
        criteria.max_experience = experience.max;

        criteria
    }
}

impl Default for QueryTranslator {
    /// Translator over the built-in dictionaries
    fn default() -> Self {
        Self::new(Arc::new(KeywordDictionaries::default()))
    }
}
