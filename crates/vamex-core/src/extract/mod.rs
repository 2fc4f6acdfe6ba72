//! Rule-based field extraction engine.
//!
//! A [`RuleSet`] is a named, fixed collection of [`FieldRule`]s matching
//! one known declaration layout. Evaluating one against a document is a
//! single deterministic pass: every rule runs independently, unmatched
//! rules contribute nothing, and nothing ever fails.

mod anchor;
mod capture;
mod rule;

pub use anchor::AnchorPattern;
pub use capture::{CapturePattern, SplitSide};
pub use rule::{FieldRule, Locator};

use std::collections::BTreeMap;

use tracing::debug;

use crate::document::DocumentText;

/// Per-document mapping of field name to captured value.
///
/// Absence of a key means the field's rule found no match; an empty
/// string is never stored.
pub type ExtractionResult = BTreeMap<String, String>;

/// A named collection of field rules for one declaration layout.
#[derive(Debug, Clone)]
pub struct RuleSet {
    name: &'static str,
    description: &'static str,
    rules: Vec<FieldRule>,
}

impl RuleSet {
    pub fn new(name: &'static str, description: &'static str, rules: Vec<FieldRule>) -> Self {
        Self {
            name,
            description,
            rules,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Field names this layout knows about, in rule order.
    pub fn field_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.field).collect()
    }

    /// Run every rule of this set against one normalized document.
    ///
    /// Total and idempotent; an empty document yields an empty result.
    pub fn extract(&self, doc: &DocumentText) -> ExtractionResult {
        let mut result = ExtractionResult::new();

        for rule in &self.rules {
            if let Some(value) = rule.evaluate(doc) {
                result.insert(rule.field.to_owned(), value);
            }
        }

        debug!(
            variant = self.name,
            matched = result.len(),
            rules = self.rules.len(),
            "extraction pass complete"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn test_set() -> RuleSet {
        RuleSet::new(
            "test",
            "synthetic layout",
            vec![
                FieldRule::new(
                    "nrArticole",
                    Locator::SameLine,
                    AnchorPattern::contains_ci("total articole"),
                    CapturePattern::group(r"(?i)total articole\D*(\d+)"),
                ),
                FieldRule::new(
                    "mrn",
                    Locator::SameLine,
                    AnchorPattern::starts_with_ci("mrn"),
                    CapturePattern::split_after(r":"),
                ),
            ],
        )
    }

    #[test]
    fn test_union_of_independent_rules() {
        let doc = DocumentText::new("MRN: 21ROCT1234567890\nTotal articole 3 buc");
        let result = test_set().extract(&doc);
        assert_eq!(result.get("mrn").map(String::as_str), Some("21ROCT1234567890"));
        assert_eq!(result.get("nrArticole").map(String::as_str), Some("3"));
    }

    #[test]
    fn test_unmatched_rule_leaves_no_key() {
        let doc = DocumentText::new("Total articole 3 buc");
        let result = test_set().extract(&doc);
        assert_eq!(result.get("nrArticole").map(String::as_str), Some("3"));
        assert!(!result.contains_key("mrn"));
    }

    #[test]
    fn test_empty_input_yields_empty_result() {
        let doc = DocumentText::new("");
        assert!(test_set().extract(&doc).is_empty());
    }

    #[test]
    fn test_never_fails_on_junk_input() {
        let junk = "\u{0}\u{1}\t\t]]]]((((\nMRN\nZ822\n\u{fffd}��00  : :: -";
        let doc = DocumentText::new(junk);
        // Worst case is an empty mapping, never a panic.
        let _ = test_set().extract(&doc);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let doc = DocumentText::new("MRN: 21ROCT1234567890\nTotal articole 3 buc");
        let set = test_set();
        assert_eq!(set.extract(&doc), set.extract(&doc));
    }
}
