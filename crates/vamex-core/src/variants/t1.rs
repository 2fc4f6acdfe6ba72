//! T1 layout: the transit accompanying document.
//!
//! The MRN box sits above the number and the two often end up on
//! separate lines of the flattened text, so the MRN rule works over the
//! joined text. Containers are listed in a block below their heading.

use crate::extract::{AnchorPattern, CapturePattern, FieldRule, Locator};

pub(super) fn rules() -> Vec<FieldRule> {
    vec![
        // "MRN" label with the number on the same or the following line.
        FieldRule::new(
            "mrn",
            Locator::FullText,
            AnchorPattern::contains("MRN"),
            CapturePattern::group(r"(?i)MRN[\s:]*\r?\n?\s*([0-9]{2}RO[A-Z0-9]+)"),
        ),
        FieldRule::new(
            "nrDeReferinta",
            Locator::SameLine,
            AnchorPattern::contains_ci("lrn"),
            CapturePattern::split_after(r"(?i)lrn[:\s]+").first_token(),
        ),
        FieldRule::new(
            "nrDestinatar",
            Locator::SameLine,
            AnchorPattern::contains("Destinatar"),
            CapturePattern::group(r"(RO\d{6,})"),
        ),
        // Previous-document line: "Z821 24ROBU1111222233 / 03.04.2024"
        FieldRule::new(
            "referintaDocument",
            Locator::SameLine,
            AnchorPattern::starts_with("Z821"),
            CapturePattern::group(r"Z821\s+(.+?\s*/\s*\d{2}\.\d{2}\.\d{4})"),
        ),
        // Containers are listed one per line under the heading; the
        // first listed container is taken.
        FieldRule::new(
            "nrContainer",
            Locator::ForwardScan {
                until: AnchorPattern::pattern(r"^[A-Z]{4}\d{7}"),
            },
            AnchorPattern::contains_ci("containere"),
            CapturePattern::group(r"([A-Z]{4}\d{7})"),
        ),
        // "Sigilii: RO0012345"
        FieldRule::new(
            "sigilii",
            Locator::SameLine,
            AnchorPattern::contains_ci("sigilii"),
            CapturePattern::group(r"(?i)sigilii\W*(\S+)"),
        ),
        FieldRule::new(
            "nrArticole",
            Locator::SameLine,
            AnchorPattern::contains_ci("total articole"),
            CapturePattern::group(r"(?i)total articole\D*(\d+)"),
        ),
        // "Biroul de destinatie RO080000 Bucuresti"
        FieldRule::new(
            "birouDestinatie",
            Locator::SameLine,
            AnchorPattern::contains_ci("biroul de destinatie"),
            CapturePattern::group(r"(RO\d{6})"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use crate::document::DocumentText;
    use crate::variants::named;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "\
DOCUMENT DE INSOTIRE TRANZIT
MRN
24RO123456789012AB
LRN: T1-2024-0042 birou plecare
Destinatar RO1234567 SC EXEMPLU LOGISTIC SRL
Z821 24ROBU1111222233 / 03.04.2024
Containere
2 buc
MSKU1234567 40HC
TCLU7654321 20GP
Sigilii: RO0012345
Total articole 12
Biroul de destinatie RO080000 Bucuresti
";

    #[test]
    fn test_full_document() {
        let doc = DocumentText::new(SAMPLE);
        let result = named("t1").unwrap().extract(&doc);

        let get = |k: &str| result.get(k).map(String::as_str);
        assert_eq!(get("mrn"), Some("24RO123456789012AB"));
        assert_eq!(get("nrDeReferinta"), Some("T1-2024-0042"));
        assert_eq!(get("nrDestinatar"), Some("RO1234567"));
        assert_eq!(
            get("referintaDocument"),
            Some("24ROBU1111222233 / 03.04.2024")
        );
        // First listed container, not a later one.
        assert_eq!(get("nrContainer"), Some("MSKU1234567"));
        assert_eq!(get("sigilii"), Some("RO0012345"));
        assert_eq!(get("nrArticole"), Some("12"));
        assert_eq!(get("birouDestinatie"), Some("RO080000"));
    }

    #[test]
    fn test_mrn_on_same_line_also_matches() {
        let doc = DocumentText::new("MRN: 24RO123456789012AB");
        let result = named("t1").unwrap().extract(&doc);
        assert_eq!(
            result.get("mrn").map(String::as_str),
            Some("24RO123456789012AB")
        );
    }

    #[test]
    fn test_container_heading_without_numbers() {
        let doc = DocumentText::new("Containere\nniciunul declarat");
        let result = named("t1").unwrap().extract(&doc);
        assert!(!result.contains_key("nrContainer"));
    }
}
