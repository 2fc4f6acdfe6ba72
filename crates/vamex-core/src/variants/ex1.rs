//! EX1 layout: the export declaration print.
//!
//! Carries an exporter number instead of a consignee, writes the LRN
//! with a slash, and suffixes the statistical value with its currency.
//! Export prints have no duty table, so there is no payment rule here.

use crate::extract::{AnchorPattern, CapturePattern, FieldRule, Locator};

pub(super) fn rules() -> Vec<FieldRule> {
    vec![
        // "2/1 Exportator Nr. RO9876543210 SC EXEMPLU SRL"
        FieldRule::new(
            "nrExportator",
            Locator::SameLine,
            AnchorPattern::contains("Exportator"),
            CapturePattern::group(r"Nr\W*([A-Z0-9]+)"),
        ),
        // Clean prints carry a full 18-char MRN; older ones just dump
        // whatever follows the colon.
        FieldRule::new(
            "mrn",
            Locator::SameLine,
            AnchorPattern::contains_ci("mrn"),
            CapturePattern::group(r"\b(\d{2}RO[A-Z0-9]{14})\b").or_split_after(r":"),
        ),
        // "LRN / EXA2024001234"
        FieldRule::new(
            "nrDeReferinta",
            Locator::FullText,
            AnchorPattern::contains_ci("lrn"),
            CapturePattern::group(r"(?i)LRN\s*/\s*([A-Za-z0-9]+)"),
        ),
        // "Valoare statistica 23.456,00 RON"
        FieldRule::new(
            "valoareStatistica",
            Locator::SameLine,
            AnchorPattern::contains_ci("valoare statistica"),
            CapturePattern::group(r"([\d.,]+)\s*(?:RON|EUR)"),
        ),
        // Export licence line: "N830 DEX4711 / 15.03.2024"
        FieldRule::new(
            "referintaDocument",
            Locator::SameLine,
            AnchorPattern::starts_with("N830"),
            CapturePattern::group(r"N830\s+(.+?\s*/\s*\d{2}\.\d{2}\.\d{4})"),
        ),
        // "Numar articole: 5"
        FieldRule::new(
            "nrArticole",
            Locator::SameLine,
            AnchorPattern::contains_ci("numar articole"),
            CapturePattern::split_after(r":").first_token(),
        ),
        FieldRule::new(
            "nrContainer",
            Locator::SameLine,
            AnchorPattern::contains_ci("container"),
            CapturePattern::group(r"([A-Z]{4}\d{7})"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use crate::document::DocumentText;
    use crate::variants::named;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "\
DECLARATIE VAMALA DE EXPORT
MRN 24ROCT112233445566
LRN / EXA2024001234
2/1 Exportator Nr. RO9876543210 SC EXEMPLU EXPORT SRL
Valoare statistica 23.456,00 RON
N830 DEX4711 / 15.03.2024
Numar articole: 5
Container TCLU7654321 sigilat
";

    #[test]
    fn test_full_document() {
        let doc = DocumentText::new(SAMPLE);
        let result = named("ex1").unwrap().extract(&doc);

        let get = |k: &str| result.get(k).map(String::as_str);
        assert_eq!(get("mrn"), Some("24ROCT112233445566"));
        assert_eq!(get("nrDeReferinta"), Some("EXA2024001234"));
        assert_eq!(get("nrExportator"), Some("RO9876543210"));
        assert_eq!(get("valoareStatistica"), Some("23.456,00"));
        assert_eq!(get("referintaDocument"), Some("DEX4711 / 15.03.2024"));
        assert_eq!(get("nrArticole"), Some("5"));
        assert_eq!(get("nrContainer"), Some("TCLU7654321"));
    }

    #[test]
    fn test_mrn_split_fallback() {
        let doc = DocumentText::new("MRN: completat manual");
        let result = named("ex1").unwrap().extract(&doc);
        assert_eq!(
            result.get("mrn").map(String::as_str),
            Some("completat manual")
        );
    }

    #[test]
    fn test_statistical_value_requires_currency() {
        // A bare number near the label is not trusted on this print.
        let doc = DocumentText::new("Valoare statistica 23.456,00");
        let result = named("ex1").unwrap().extract(&doc);
        assert!(!result.contains_key("valoareStatistica"));
    }
}
