//! Filter implementations for the candidate pipeline.
//!
//! One filter per filter dimension; `FilterEngine` composes all of them.

pub mod experience_range;
pub mod skills;
pub mod exact_set;
pub mod substring;

// Re-export for convenience
pub use experience_range::ExperienceRangeFilter;
pub use skills::SkillsFilter;
pub use exact_set::{CompanyFilter, CourseFilter, InstitutionFilter};
pub use substring::{EmailFilter, NameFilter, PhoneFilter};
