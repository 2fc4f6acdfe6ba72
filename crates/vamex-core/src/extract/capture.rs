//! Capture patterns: lifting a value out of located text.
//!
//! Values are lifted verbatim. Nothing here parses numbers or rewrites
//! decimal separators; the engine's contract is locate-and-lift only.

use regex::Regex;

/// Which side of the first delimiter occurrence a split keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitSide {
    Before,
    After,
}

/// How a value is pulled from the located line or text span.
#[derive(Debug, Clone)]
pub enum CapturePattern {
    /// Regex with exactly one capturing group; the group's text, trimmed.
    Group(Regex),
    /// Split on the first delimiter match and keep one side, trimmed.
    /// With `first_token`, only the first whitespace-delimited token of
    /// that side survives.
    Split {
        delimiter: Regex,
        side: SplitSide,
        first_token: bool,
    },
    /// Group capture with a split fallback when the regex does not match.
    GroupOrSplit {
        group: Regex,
        delimiter: Regex,
        side: SplitSide,
        first_token: bool,
    },
}

impl CapturePattern {
    /// Build a one-group regex capture. Panics on an invalid pattern;
    /// captures only ever come from the static rule tables.
    pub fn group(pattern: &str) -> Self {
        Self::Group(Regex::new(pattern).unwrap())
    }

    pub fn split_after(delimiter: &str) -> Self {
        Self::Split {
            delimiter: Regex::new(delimiter).unwrap(),
            side: SplitSide::After,
            first_token: false,
        }
    }

    pub fn split_before(delimiter: &str) -> Self {
        Self::Split {
            delimiter: Regex::new(delimiter).unwrap(),
            side: SplitSide::Before,
            first_token: false,
        }
    }

    /// Restrict a split capture to the first whitespace token of its side.
    pub fn first_token(self) -> Self {
        match self {
            Self::Split {
                delimiter, side, ..
            } => Self::Split {
                delimiter,
                side,
                first_token: true,
            },
            Self::GroupOrSplit {
                group,
                delimiter,
                side,
                ..
            } => Self::GroupOrSplit {
                group,
                delimiter,
                side,
                first_token: true,
            },
            other => other,
        }
    }

    /// Add a split-after fallback to a group capture.
    pub fn or_split_after(self, delimiter: &str) -> Self {
        match self {
            Self::Group(group) => Self::GroupOrSplit {
                group,
                delimiter: Regex::new(delimiter).unwrap(),
                side: SplitSide::After,
                first_token: false,
            },
            other => other,
        }
    }

    /// Apply the capture to located text. `None` when the pattern does
    /// not match or the captured value trims to nothing; an empty value
    /// is indistinguishable from no match by contract.
    pub fn apply(&self, text: &str) -> Option<String> {
        match self {
            Self::Group(re) => apply_group(re, text),
            Self::Split {
                delimiter,
                side,
                first_token,
            } => apply_split(delimiter, *side, *first_token, text),
            Self::GroupOrSplit {
                group,
                delimiter,
                side,
                first_token,
            } => apply_group(group, text)
                .or_else(|| apply_split(delimiter, *side, *first_token, text)),
        }
    }
}

fn apply_group(re: &Regex, text: &str) -> Option<String> {
    let value = re.captures(text)?.get(1)?.as_str().trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

fn apply_split(delimiter: &Regex, side: SplitSide, first_token: bool, text: &str) -> Option<String> {
    let m = delimiter.find(text)?;
    let kept = match side {
        SplitSide::Before => &text[..m.start()],
        SplitSide::After => &text[m.end()..],
    };
    let kept = kept.trim();
    let value = if first_token {
        kept.split_whitespace().next().unwrap_or("")
    } else {
        kept
    };
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_group_trims_value() {
        let capture = CapturePattern::group(r"Nr\W*([A-Z0-9]+)");
        assert_eq!(
            capture.apply("Destinatar Nr. RO1234567 Str. Lunga"),
            Some("RO1234567".to_owned())
        );
    }

    #[test]
    fn test_group_no_match() {
        let capture = CapturePattern::group(r"(\d+)");
        assert_eq!(capture.apply("no digits here"), None);
    }

    #[test]
    fn test_split_after_keeps_remainder() {
        let capture = CapturePattern::split_after(r"[:\s-]+");
        assert_eq!(
            capture.apply("MRN: 21ROCT1234567890"),
            Some("21ROCT1234567890".to_owned())
        );
    }

    #[test]
    fn test_split_after_on_first_occurrence_only() {
        let capture = CapturePattern::split_after(r":");
        assert_eq!(capture.apply("a: b: c"), Some("b: c".to_owned()));
    }

    #[test]
    fn test_split_before() {
        let capture = CapturePattern::split_before(r"/");
        assert_eq!(capture.apply("4512 / 12.03.2024"), Some("4512".to_owned()));
    }

    #[test]
    fn test_split_first_token() {
        let capture = CapturePattern::split_after(r"A00\W*").first_token();
        assert_eq!(
            capture.apply("A00 - 1.234,56 RON"),
            Some("1.234,56".to_owned())
        );
    }

    #[test]
    fn test_split_empty_side_is_absent() {
        let capture = CapturePattern::split_after(r":");
        assert_eq!(capture.apply("MRN:"), None);
    }

    #[test]
    fn test_group_or_split_fallback() {
        let capture = CapturePattern::group(r"\b(\d{2}RO[A-Z0-9]{14})\b").or_split_after(r":");
        // Group wins when it matches.
        assert_eq!(
            capture.apply("MRN 24ROCT1234567890AB"),
            Some("24ROCT1234567890AB".to_owned())
        );
        // Fallback when it does not.
        assert_eq!(
            capture.apply("MRN: scris de mana"),
            Some("scris de mana".to_owned())
        );
    }

    #[test]
    fn test_value_lifted_verbatim() {
        // Decimal separators are never normalized.
        let capture = CapturePattern::group(r"([\d.,]+)");
        assert_eq!(
            capture.apply("Valoarea statistica 12.345,67"),
            Some("12.345,67".to_owned())
        );
    }
}
