//! Natural-language to filter-criteria translation.
//!
//! This crate provides:
//! - `KeywordDictionaries`: canonical skills, institutions, companies and
//!   courses with their aliases, built in or loaded from JSON
//! - `QueryTranslator`: finds dictionary terms and experience phrases in
//!   free text and produces `FilterCriteria`
//! - `interpret`: a one-line summary of what a query was understood as
//!
//! ## Example Usage
//! ```
//! use translator::{interpret, QueryTranslator};
//!
//! let translator = QueryTranslator::default();
//! let criteria = translator.translate(
//!     "Show me candidates from IIT or MIT with minimum 2 years of experience in java",
//! );
//!
//! assert_eq!(criteria.institutions, vec!["IIT", "MIT"]);
//! assert_eq!(criteria.skills, vec!["java"]);
//! assert_eq!(criteria.min_experience, Some(2));
//! assert_eq!(
//!     interpret(&criteria),
//!     "Skills: java | Institutions: IIT, MIT | Experience: at least 2 years"
//! );
//! ```

pub mod dictionary;
pub mod error;
pub mod experience;
pub mod interpret;
pub mod translator;

pub use dictionary::{Category, KeywordDictionaries, KeywordEntry};
pub use error::{Result, TranslatorError};
pub use interpret::{interpret, NO_CRITERIA};
pub use translator::QueryTranslator;
