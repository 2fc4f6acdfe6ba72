//! Anchor patterns: the markers that locate a field's neighbourhood.

use regex::Regex;

/// A marker tested against a single line or the full document text.
///
/// Literal anchors carry their own case handling so one rule can match
/// "MRN"/"Mrn" while another stays strict about "Z822". Regex anchors
/// encode case handling in the pattern itself.
#[derive(Debug, Clone)]
pub enum AnchorPattern {
    /// Line contains the literal anywhere.
    Contains { literal: String, ignore_case: bool },
    /// Line starts with the literal.
    StartsWith { literal: String, ignore_case: bool },
    /// Line matches the regex.
    Pattern(Regex),
}

impl AnchorPattern {
    pub fn contains(literal: &str) -> Self {
        Self::Contains {
            literal: literal.to_owned(),
            ignore_case: false,
        }
    }

    pub fn contains_ci(literal: &str) -> Self {
        Self::Contains {
            literal: literal.to_lowercase(),
            ignore_case: true,
        }
    }

    pub fn starts_with(literal: &str) -> Self {
        Self::StartsWith {
            literal: literal.to_owned(),
            ignore_case: false,
        }
    }

    pub fn starts_with_ci(literal: &str) -> Self {
        Self::StartsWith {
            literal: literal.to_lowercase(),
            ignore_case: true,
        }
    }

    /// Build a regex anchor. Panics on an invalid pattern; anchors only
    /// ever come from the static rule tables.
    pub fn pattern(pattern: &str) -> Self {
        Self::Pattern(Regex::new(pattern).unwrap())
    }

    /// Test this anchor against one line of text.
    pub fn matches(&self, line: &str) -> bool {
        match self {
            Self::Contains {
                literal,
                ignore_case: false,
            } => line.contains(literal.as_str()),
            Self::Contains {
                literal,
                ignore_case: true,
            } => line.to_lowercase().contains(literal.as_str()),
            Self::StartsWith {
                literal,
                ignore_case: false,
            } => line.starts_with(literal.as_str()),
            Self::StartsWith {
                literal,
                ignore_case: true,
            } => line.to_lowercase().starts_with(literal.as_str()),
            Self::Pattern(re) => re.is_match(line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_case_sensitive() {
        let anchor = AnchorPattern::contains("Destinatar");
        assert!(anchor.matches("8/3 Destinatar Nr RO123"));
        assert!(!anchor.matches("8/3 DESTINATAR Nr RO123"));
    }

    #[test]
    fn test_contains_case_insensitive() {
        let anchor = AnchorPattern::contains_ci("total articole");
        assert!(anchor.matches("Total articole 3 buc"));
        assert!(anchor.matches("TOTAL ARTICOLE 3"));
        assert!(!anchor.matches("articole"));
    }

    #[test]
    fn test_starts_with() {
        let anchor = AnchorPattern::starts_with("Z822");
        assert!(anchor.matches("Z822 24ROBU1234 / 01.02.2024"));
        assert!(!anchor.matches("ref Z822 24ROBU1234"));
    }

    #[test]
    fn test_starts_with_ci() {
        let anchor = AnchorPattern::starts_with_ci("mrn");
        assert!(anchor.matches("MRN: 21ROCT1234567890"));
        assert!(anchor.matches("Mrn 21ROCT1234567890"));
        assert!(!anchor.matches("LRN MRN"));
    }

    #[test]
    fn test_regex_anchor() {
        let anchor = AnchorPattern::pattern(r"^[A-Z]{4}\d{7}$");
        assert!(anchor.matches("MSKU1234567"));
        assert!(!anchor.matches("container MSKU1234567"));
    }
}
