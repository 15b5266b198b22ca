//! # Criteria Crate
//!
//! Structured search criteria and the request-side processing that happens
//! before any candidate is looked at.
//!
//! ## Components
//!
//! - **types**: `FilterCriteria` (what the caller sent), `NormalizedFilter`
//!   (what the matchers use), `ExperienceRange`
//! - **normalize**: trimming, case-folding and deduplication
//! - **validation**: request rules (email/phone format, experience bounds)
//!
//! ## Example Usage
//!
//! ```ignore
//! use criteria::{normalize, validate, FilterCriteria};
//!
//! let criteria = FilterCriteria::new()
//!     .with_skills(["java", " Java ", "python"])
//!     .with_experience(Some(2), Some(5));
//!
//! validate(&criteria).map_err(|errors| /* report */)?;
//! let filter = normalize(&criteria);
//! assert_eq!(filter.skills.len(), 2);
//! ```

pub mod types;
pub mod normalize;
pub mod validation;

pub use types::{ExperienceRange, FilterCriteria, NormalizedFilter, NormalizedTerm};
pub use normalize::normalize;
pub use validation::{validate, ValidationError, MAX_EXPERIENCE_YEARS};
