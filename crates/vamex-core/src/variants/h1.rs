//! H1 layout: the standard import declaration print.
//!
//! Labels and values share a line, amounts use dotted-thousands comma
//! decimals, and the duty total sits in a table a few lines below the
//! "Total plata" heading.

use crate::extract::{AnchorPattern, CapturePattern, FieldRule, Locator};

pub(super) fn rules() -> Vec<FieldRule> {
    vec![
        // "8/3 Destinatar Nr. RO1234567890 SC EXEMPLU SRL"
        FieldRule::new(
            "nrDestinatar",
            Locator::SameLine,
            AnchorPattern::contains("Destinatar"),
            CapturePattern::group(r"Nr\W*([A-Z0-9]+)"),
        ),
        // "MRN: 21ROCT123456789012" / "MRN 21ROCT123456789012"
        FieldRule::new(
            "mrn",
            Locator::SameLine,
            AnchorPattern::starts_with_ci("mrn"),
            CapturePattern::split_after(r"[:\s-]+"),
        ),
        // LRN may be wrapped by the print layout, so it is searched over
        // the joined text rather than line by line.
        FieldRule::new(
            "nrDeReferinta",
            Locator::FullText,
            AnchorPattern::contains_ci("lrn"),
            CapturePattern::group(r"(?i)LRN\s*[:\s]*([A-Za-z0-9-]+)"),
        ),
        // "Valoarea statistica 12.345,67"
        FieldRule::new(
            "valoareStatistica",
            Locator::SameLine,
            AnchorPattern::contains_ci("valoarea statistica"),
            CapturePattern::group(r"([\d.,]+)"),
        ),
        // Label is truncated differently across prints ("anticipata" /
        // "anticipată"), so the anchor stops before the suffix.
        FieldRule::new(
            "depozitPlataAnticipata",
            Locator::SameLine,
            AnchorPattern::contains_ci("depozit plata anticipa"),
            CapturePattern::group(r"([\d.,]+)"),
        ),
        // Previous-document line: "Z822 24ROBU9876543210 / 01.02.2024"
        FieldRule::new(
            "referintaDocument",
            Locator::SameLine,
            AnchorPattern::starts_with("Z822"),
            CapturePattern::group(r"Z822\s+(.+?\s*/\s*\d{2}\.\d{2}\.\d{4})"),
        ),
        // The A00 duty row appears somewhere below the payment heading.
        FieldRule::new(
            "totalPlataA00",
            Locator::ForwardScan {
                until: AnchorPattern::starts_with("A00"),
            },
            AnchorPattern::starts_with_ci("total plata"),
            CapturePattern::group(r"A00\W*([\d.,]+)"),
        ),
        // "Total articole 3 buc"
        FieldRule::new(
            "nrArticole",
            Locator::SameLine,
            AnchorPattern::contains_ci("total articole"),
            CapturePattern::group(r"(?i)total articole\D*(\d+)"),
        ),
        // ISO 6346 owner code + serial: "MSKU1234567"
        FieldRule::new(
            "nrContainer",
            Locator::SameLine,
            AnchorPattern::contains_ci("container"),
            CapturePattern::group(r"([A-Z]{4}\d{7})"),
        ),
    ]
}
