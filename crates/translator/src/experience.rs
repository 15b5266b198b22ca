//! Extraction of experience bounds from free text.
//!
//! Recognized phrasings (case-insensitive):
//! - range: `3-5 years`, `3 to 5 years`
//! - lower bound: `minimum 2 years`, `min 2 years`, `at least 2 years`, `2+ years`
//! - upper bound: `maximum 4 years`, `max 4 years`, `at most 4 years`, `up to 4 years`
//!
//! A range phrase wins over the single-bound phrases. Numbers are taken as
//! written, so `5-3 years` yields an inverted range that matches nothing.

use data_loader::Years;
use regex::Regex;
use std::sync::LazyLock;

macro_rules! experience_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| {
            Regex::new($regex_str)
                .map_err(|e| tracing::warn!("Experience pattern disabled: {}", e))
                .ok()
        });
    };
}

experience_pattern!(
    RE_RANGE,
    r"\b(\d+)\s*(?:-|–|to)\s*(\d+)\s*\+?\s*(?:years?|yrs?)\b"
);

experience_pattern!(
    RE_MIN,
    r"\b(?:minimum|min|at\s+least)\s+(?:of\s+)?(\d+)\s*\+?\s*(?:years?|yrs?)\b"
);

experience_pattern!(RE_PLUS, r"\b(\d+)\s*\+\s*(?:years?|yrs?)\b");

experience_pattern!(
    RE_MAX,
    r"\b(?:maximum|max|at\s+most|up\s+to)\s+(?:of\s+)?(\d+)\s*(?:years?|yrs?)\b"
);

/// Years parsed out of a query; either side may be absent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExperienceBounds {
    pub min: Option<Years>,
    pub max: Option<Years>,
}

fn capture_years(pattern: &LazyLock<Option<Regex>>, text: &str, group: usize) -> Option<Years> {
    let regex = pattern.as_ref()?;
    let caps = regex.captures(text)?;
    caps.get(group)?.as_str().parse().ok()
}

/// Pull experience bounds out of already case-folded text
pub fn extract_experience(folded: &str) -> ExperienceBounds {
    if let Some(caps) = RE_RANGE.as_ref().and_then(|re| re.captures(folded)) {
        let min = caps.get(1).and_then(|m| m.as_str().parse().ok());
        let max = caps.get(2).and_then(|m| m.as_str().parse().ok());
        if min.is_some() && max.is_some() {
            return ExperienceBounds { min, max };
        }
    }

    let min = capture_years(&RE_MIN, folded, 1).or_else(|| capture_years(&RE_PLUS, folded, 1));
    let max = capture_years(&RE_MAX, folded, 1);
    ExperienceBounds { min, max }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(text: &str) -> (Option<Years>, Option<Years>) {
        let b = extract_experience(&text.to_lowercase());
        (b.min, b.max)
    }

    #[test]
    fn test_minimum_phrases() {
        assert_eq!(bounds("minimum 2 years of experience"), (Some(2), None));
        assert_eq!(bounds("at least 3 years"), (Some(3), None));
        assert_eq!(bounds("min 4 yrs"), (Some(4), None));
        assert_eq!(bounds("5+ years in python"), (Some(5), None));
    }

    #[test]
    fn test_range_phrases() {
        assert_eq!(bounds("python developers with 3-5 years experience"), (Some(3), Some(5)));
        assert_eq!(bounds("1 to 4 years"), (Some(1), Some(4)));
    }

    #[test]
    fn test_maximum_phrases() {
        assert_eq!(bounds("at most 2 years"), (None, Some(2)));
        assert_eq!(bounds("up to 6 years"), (None, Some(6)));
        assert_eq!(bounds("minimum 1 year and maximum 3 years"), (Some(1), Some(3)));
    }

    #[test]
    fn test_range_wins_over_single_bounds() {
        assert_eq!(bounds("minimum 1 year, ideally 2-4 years"), (Some(2), Some(4)));
    }

    #[test]
    fn test_inverted_range_kept_as_written() {
        assert_eq!(bounds("5-3 years"), (Some(5), Some(3)));
    }

    #[test]
    fn test_no_phrase() {
        assert_eq!(bounds("java developers from IIT"), (None, None));
        assert_eq!(bounds("minimum effort"), (None, None));
    }
}
