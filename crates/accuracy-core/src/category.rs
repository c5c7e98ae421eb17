/// Label taxonomy for classifier output.
///
/// Exact-match categories drive the per-category tallies; the "Check" prefix
/// drives the combined check-family tally.

use serde::{Deserialize, Serialize};

/// Prefix shared by the Check and Checkmate labels.
const CHECK_FAMILY_PREFIX: &str = "Check";

/// Position category a dataset label names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Nothing,
    Check,
    Checkmate,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::Nothing => "Nothing",
            Category::Check => "Check",
            Category::Checkmate => "Checkmate",
        }
    }
}

/// Map a label to its category by exact match. Anything else is uncategorized.
pub fn classify(label: &str) -> Option<Category> {
    match label {
        "Nothing" => Some(Category::Nothing),
        "Check" => Some(Category::Check),
        "Checkmate" => Some(Category::Checkmate),
        _ => None,
    }
}

/// True when the label's first five characters are "Check".
pub fn is_check_family(label: &str) -> bool {
    label.starts_with(CHECK_FAMILY_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_exact_labels() {
        assert_eq!(classify("Nothing"), Some(Category::Nothing));
        assert_eq!(classify("Check"), Some(Category::Check));
        assert_eq!(classify("Checkmate"), Some(Category::Checkmate));
    }

    #[test]
    fn test_classify_is_case_and_whitespace_sensitive() {
        assert_eq!(classify("check"), None);
        assert_eq!(classify("Check "), None);
        assert_eq!(classify(""), None);
        assert_eq!(classify("Stalemate"), None);
    }

    #[test]
    fn test_name_round_trips_through_classify() {
        for category in [Category::Nothing, Category::Check, Category::Checkmate] {
            assert_eq!(classify(category.name()), Some(category));
        }
    }

    #[test]
    fn test_check_family_prefix() {
        assert!(is_check_family("Check"));
        assert!(is_check_family("Checkmate"));
        assert!(is_check_family("Checkers"));
        assert!(!is_check_family("Chec"));
        assert!(!is_check_family("Nothing"));
        assert!(!is_check_family(""));
    }
}
