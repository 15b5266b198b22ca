//! Keyword dictionaries the translator recognizes.
//!
//! Each category is a list of entries: a canonical term (the spelling
//! that ends up in the criteria) plus any aliases that should map to it.
//! Dictionaries are plain configuration, built once and shared behind an
//! `Arc`.

use crate::error::{Result, TranslatorError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

// =============================================================================
// Category
// =============================================================================

/// The criteria field a recognized keyword is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Skill,
    Institution,
    Company,
    Course,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Skill,
        Category::Institution,
        Category::Company,
        Category::Course,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Skill => "skill",
            Category::Institution => "institution",
            Category::Company => "company",
            Category::Course => "course",
        };
        f.write_str(label)
    }
}

// =============================================================================
// KeywordEntry
// =============================================================================

/// A canonical term and its aliases.
///
/// In JSON an entry is either a bare string (`"java"`) or an object
/// (`{"term": "nodejs", "aliases": ["node.js"]}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawEntry")]
pub struct KeywordEntry {
    pub term: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Term(String),
    Full {
        term: String,
        #[serde(default)]
        aliases: Vec<String>,
    },
}

impl From<RawEntry> for KeywordEntry {
    fn from(raw: RawEntry) -> Self {
        match raw {
            RawEntry::Term(term) => KeywordEntry::new(term),
            RawEntry::Full { term, aliases } => KeywordEntry { term, aliases },
        }
    }
}

impl KeywordEntry {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            aliases: Vec::new(),
        }
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// The canonical term followed by every alias
    pub fn spellings(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.term.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

// =============================================================================
// KeywordDictionaries
// =============================================================================

/// All four keyword dictionaries.
///
/// A category missing from a JSON file falls back to the built-in list,
/// so a file can override just the skills, for example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordDictionaries {
    pub skills: Vec<KeywordEntry>,
    pub institutions: Vec<KeywordEntry>,
    pub companies: Vec<KeywordEntry>,
    pub courses: Vec<KeywordEntry>,
}

impl KeywordDictionaries {
    /// Dictionaries with no entries at all; nothing will be recognized
    pub fn empty() -> Self {
        Self {
            skills: Vec::new(),
            institutions: Vec::new(),
            companies: Vec::new(),
            courses: Vec::new(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load dictionaries from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(TranslatorError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let contents = std::fs::read_to_string(path)?;
        let dictionaries = Self::from_json_str(&contents)?;
        tracing::info!(
            "Loaded keyword dictionaries from {}: {} skills, {} institutions, {} companies, {} courses",
            path.display(),
            dictionaries.skills.len(),
            dictionaries.institutions.len(),
            dictionaries.companies.len(),
            dictionaries.courses.len()
        );
        Ok(dictionaries)
    }

    pub fn entries(&self, category: Category) -> &[KeywordEntry] {
        match category {
            Category::Skill => &self.skills,
            Category::Institution => &self.institutions,
            Category::Company => &self.companies,
            Category::Course => &self.courses,
        }
    }

    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.entries(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn entries(list: &[(&str, &[&str])]) -> Vec<KeywordEntry> {
    list.iter()
        .map(|(term, aliases)| KeywordEntry::new(*term).with_aliases(aliases.iter().copied()))
        .collect()
}

impl Default for KeywordDictionaries {
    /// The built-in vocabulary
    fn default() -> Self {
        let skills = entries(&[
            ("java", &[]),
            ("python", &[]),
            ("javascript", &["js"]),
            ("typescript", &[]),
            ("react", &["reactjs", "react.js"]),
            ("nodejs", &["node.js"]),
            ("angular", &["angularjs"]),
            ("vue", &["vue.js", "vuejs"]),
            ("spring", &["spring boot"]),
            ("django", &[]),
            ("flask", &[]),
            ("docker", &[]),
            ("kubernetes", &["k8s"]),
            ("aws", &[]),
            ("azure", &[]),
            ("sql", &[]),
            ("mysql", &[]),
            ("postgresql", &["postgres"]),
            ("mongodb", &["mongo"]),
            ("machine learning", &["ml"]),
            ("deep learning", &[]),
            ("tensorflow", &[]),
            ("pytorch", &[]),
            ("microservices", &[]),
            ("c++", &["cpp"]),
            ("c#", &[]),
            ("rust", &[]),
            ("html", &[]),
            ("css", &[]),
        ]);

        let institutions = entries(&[
            ("IIT", &[]),
            ("IIT Delhi", &[]),
            ("IIT Mumbai", &["iit bombay"]),
            ("IIT Madras", &[]),
            ("IIT Kanpur", &[]),
            ("NIT Trichy", &[]),
            ("BITS Pilani", &[]),
            ("IIIT Hyderabad", &[]),
            ("MIT", &[]),
            ("Stanford", &[]),
            ("Harvard", &[]),
            ("Carnegie Mellon", &["cmu"]),
            ("Berkeley", &["uc berkeley"]),
            ("Oxford", &[]),
            ("Cambridge", &[]),
        ]);

        let companies = entries(&[
            ("Google", &[]),
            ("Microsoft", &[]),
            ("Amazon", &[]),
            ("Meta", &["facebook"]),
            ("Apple", &[]),
            ("Netflix", &[]),
            ("Uber", &[]),
            ("TCS", &["tata consultancy services"]),
            ("Infosys", &[]),
            ("Wipro", &[]),
            ("Accenture", &[]),
            ("IBM", &[]),
            ("Flipkart", &[]),
            ("Adobe", &[]),
        ]);

        let courses = entries(&[
            ("Computer Science", &["cse"]),
            ("Information Technology", &[]),
            ("Data Science", &[]),
            ("Electronics", &[]),
            ("MCA", &[]),
            ("MBA", &[]),
            ("B.Tech", &["btech"]),
            ("M.Tech", &["mtech"]),
            ("BCA", &[]),
        ]);

        Self {
            skills,
            institutions,
            companies,
            courses,
        }
    }
}
