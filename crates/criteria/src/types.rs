//! Filter criteria as supplied by callers, and the normalized form the
//! matchers work on.

use data_loader::Years;
use serde::{Deserialize, Serialize, Serializer};

/// Inclusive experience bounds; `None` leaves that side open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceRange {
    pub min: Option<Years>,
    pub max: Option<Years>,
}

impl ExperienceRange {
    pub fn new(min: Option<Years>, max: Option<Years>) -> Self {
        Self { min, max }
    }

    /// True when neither bound is set
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Structured search criteria.
///
/// Every field is optional. An absent scalar or an empty list means "no
/// constraint on this dimension". Field names on the wire follow the
/// request format (`instituteName`, `minExperience`, `companyName`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the candidate name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Mandatory skills (all must be present)
    pub skills: Vec<String>,
    /// Optional skills (any one suffices)
    pub optional_skills: Vec<String>,
    #[serde(rename = "instituteName")]
    pub institutions: Vec<String>,
    #[serde(rename = "course")]
    pub courses: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_experience: Option<Years>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_experience: Option<Years>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "companyName")]
    pub companies: Vec<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_optional_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional_skills = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_institutions<I, S>(mut self, institutions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.institutions = institutions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_courses<I, S>(mut self, courses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.courses = courses.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_companies<I, S>(mut self, companies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.companies = companies.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_experience(mut self, min: Option<Years>, max: Option<Years>) -> Self {
        self.min_experience = min;
        self.max_experience = max;
        self
    }

    pub fn with_phone_number(mut self, phone: impl Into<String>) -> Self {
        self.phone_number = Some(phone.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn experience(&self) -> ExperienceRange {
        ExperienceRange::new(self.min_experience, self.max_experience)
    }

    /// True when no field carries a value at all (blank strings still count
    /// as values here; see `NormalizedFilter::is_unconstrained`)
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A trimmed string together with its case-folded comparison key.
///
/// `value` keeps the caller's casing for echo-back; matchers only ever
/// look at `folded`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedTerm {
    pub value: String,
    pub folded: String,
}

impl NormalizedTerm {
    /// Trim `raw`; returns `None` when nothing is left
    pub fn new(raw: &str) -> Option<Self> {
        let value = raw.trim();
        if value.is_empty() {
            return None;
        }
        Some(Self {
            value: value.to_string(),
            folded: value.to_lowercase(),
        })
    }
}

impl Serialize for NormalizedTerm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

/// Criteria after normalization, ready for matching.
///
/// Serializes in the shape callers get echoed back: absent strings become
/// `""` and the experience bounds are nested under `experience`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedFilter {
    #[serde(serialize_with = "term_or_empty")]
    pub name: Option<NormalizedTerm>,
    pub skills: Vec<NormalizedTerm>,
    pub optional_skills: Vec<NormalizedTerm>,
    #[serde(rename = "instituteName")]
    pub institutions: Vec<NormalizedTerm>,
    #[serde(rename = "course")]
    pub courses: Vec<NormalizedTerm>,
    pub experience: ExperienceRange,
    #[serde(serialize_with = "term_or_empty")]
    pub phone_number: Option<NormalizedTerm>,
    #[serde(serialize_with = "term_or_empty")]
    pub email: Option<NormalizedTerm>,
    #[serde(rename = "companyName")]
    pub companies: Vec<NormalizedTerm>,
}

impl NormalizedFilter {
    /// True when no dimension constrains the result
    pub fn is_unconstrained(&self) -> bool {
        self.name.is_none()
            && self.skills.is_empty()
            && self.optional_skills.is_empty()
            && self.institutions.is_empty()
            && self.courses.is_empty()
            && self.experience.is_unbounded()
            && self.phone_number.is_none()
            && self.email.is_none()
            && self.companies.is_empty()
    }

    /// Turn the filter back into plain criteria (display casing kept)
    pub fn to_criteria(&self) -> FilterCriteria {
        fn values(terms: &[NormalizedTerm]) -> Vec<String> {
            terms.iter().map(|t| t.value.clone()).collect()
        }

        FilterCriteria {
            name: self.name.as_ref().map(|t| t.value.clone()),
            skills: values(&self.skills),
            optional_skills: values(&self.optional_skills),
            institutions: values(&self.institutions),
            courses: values(&self.courses),
            min_experience: self.experience.min,
            max_experience: self.experience.max,
            phone_number: self.phone_number.as_ref().map(|t| t.value.clone()),
            email: self.email.as_ref().map(|t| t.value.clone()),
            companies: values(&self.companies),
        }
    }
}

fn term_or_empty<S: Serializer>(term: &Option<NormalizedTerm>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(term.as_ref().map(|t| t.value.as_str()).unwrap_or(""))
}
