//! Known declaration layouts, each encoded purely as rule data.
//!
//! Supporting a new layout means adding a module here with its own rule
//! table; the engine itself never changes. Layouts observed in the wild
//! differ subtly in punctuation and bracket conventions for the same
//! logical field, so each gets its own explicit rule set instead of one
//! unified pattern.
//!
//! Which rule set fits an unknown document is the caller's problem: the
//! engine can be run once per variant and the results compared.

mod ex1;
mod h1;
mod h7;
mod t1;

use lazy_static::lazy_static;

use crate::extract::RuleSet;

lazy_static! {
    static ref RULE_SETS: Vec<RuleSet> = vec![
        RuleSet::new("h1", "standard import declaration", h1::rules()),
        RuleSet::new("h7", "low-value consignment import", h7::rules()),
        RuleSet::new("ex1", "export declaration", ex1::rules()),
        RuleSet::new("t1", "transit accompanying document", t1::rules()),
    ];
}

/// All known rule sets, in registration order.
pub fn all() -> &'static [RuleSet] {
    &RULE_SETS
}

/// Look up a rule set by variant name.
pub fn named(name: &str) -> Option<&'static RuleSet> {
    RULE_SETS.iter().find(|rs| rs.name() == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lookup() {
        assert!(named("h1").is_some());
        assert!(named("t1").is_some());
        assert!(named("h9").is_none());
    }

    #[test]
    fn test_variant_names_are_unique() {
        let mut names: Vec<_> = all().iter().map(|rs| rs.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), all().len());
    }

    #[test]
    fn test_one_rule_per_field_per_variant() {
        for rs in all() {
            let mut fields = rs.field_names();
            fields.sort_unstable();
            fields.dedup();
            assert_eq!(fields.len(), rs.rules().len(), "variant {}", rs.name());
        }
    }
}
