//! Normalized document text: the input every rule set is evaluated against.

/// Flattened text of one declaration document.
///
/// Holds the raw joined page text (for rules that span line boundaries)
/// and the ordered sequence of trimmed, non-empty lines. The line
/// sequence preserves document order and is never case-folded or
/// deduplicated; case handling belongs to individual anchors.
#[derive(Debug, Clone)]
pub struct DocumentText {
    text: String,
    lines: Vec<String>,
}

impl DocumentText {
    /// Normalize raw document text (pages already joined by line breaks).
    pub fn new(raw: &str) -> Self {
        let lines = raw
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_owned)
            .collect();

        Self {
            text: raw.to_owned(),
            lines,
        }
    }

    /// Trimmed, non-empty lines in original order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The full joined text, untouched.
    pub fn full_text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
