//! Field rules: one anchor, one capture, one locator strategy per field.

use tracing::trace;

use super::anchor::AnchorPattern;
use super::capture::CapturePattern;
use crate::document::DocumentText;

/// Where a rule looks for its value once the anchor line is found.
#[derive(Debug, Clone)]
pub enum Locator {
    /// Capture from the anchor line itself.
    SameLine,
    /// Capture from the line immediately after the anchor line. The
    /// anchor line is never re-examined; an anchor on the last line
    /// yields nothing.
    NextLine,
    /// Keep scanning after the anchor line until a line satisfies
    /// `until`; capture from the first such line. Exhausting the input
    /// yields nothing.
    ForwardScan { until: AnchorPattern },
    /// Ignore line boundaries: the anchor gates on the joined text and
    /// the capture runs over it, so a value may span a line break.
    FullText,
}

/// Declarative binding of a field name to its extraction recipe.
///
/// Evaluation is total: a rule that finds no anchor, no qualifying
/// line, or no capture match contributes nothing and never fails.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub field: &'static str,
    pub locator: Locator,
    pub anchor: AnchorPattern,
    pub capture: CapturePattern,
}

impl FieldRule {
    pub fn new(
        field: &'static str,
        locator: Locator,
        anchor: AnchorPattern,
        capture: CapturePattern,
    ) -> Self {
        Self {
            field,
            locator,
            anchor,
            capture,
        }
    }

    /// Evaluate this rule against one normalized document.
    ///
    /// Only the first anchor occurrence is ever considered; a second
    /// occurrence elsewhere in the document is deliberately ignored.
    pub fn evaluate(&self, doc: &DocumentText) -> Option<String> {
        let value = match &self.locator {
            Locator::SameLine => {
                let line = self.find_anchor_line(doc)?.1;
                self.capture.apply(line)
            }
            Locator::NextLine => {
                let (idx, _) = self.find_anchor_line(doc)?;
                let next = doc.lines().get(idx + 1)?;
                self.capture.apply(next)
            }
            Locator::ForwardScan { until } => {
                let (idx, _) = self.find_anchor_line(doc)?;
                let target = doc.lines()[idx + 1..].iter().find(|l| until.matches(l))?;
                self.capture.apply(target)
            }
            Locator::FullText => {
                if !self.anchor.matches(doc.full_text()) {
                    return None;
                }
                self.capture.apply(doc.full_text())
            }
        };

        if let Some(ref v) = value {
            trace!(field = self.field, value = v.as_str(), "rule matched");
        }
        value
    }

    fn find_anchor_line<'a>(&self, doc: &'a DocumentText) -> Option<(usize, &'a str)> {
        doc.lines()
            .iter()
            .enumerate()
            .find(|(_, l)| self.anchor.matches(l))
            .map(|(i, l)| (i, l.as_str()))
    }
}
