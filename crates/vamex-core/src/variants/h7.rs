//! H7 layout: the low-value consignment import print.
//!
//! This print puts most labels on their own line with the value below,
//! writes the declarant id in square brackets, and keeps the diacritics
//! the H1 print drops ("statistică").

use crate::extract::{AnchorPattern, CapturePattern, FieldRule, Locator};

pub(super) fn rules() -> Vec<FieldRule> {
    vec![
        // "Destinatar [RO1234567890] SC EXEMPLU SRL"
        FieldRule::new(
            "nrDestinatar",
            Locator::SameLine,
            AnchorPattern::contains("Destinatar"),
            CapturePattern::group(r"\[([A-Z0-9]+)\]"),
        ),
        // "MRN" on its own line, the number below it.
        FieldRule::new(
            "mrn",
            Locator::NextLine,
            AnchorPattern::starts_with_ci("mrn"),
            CapturePattern::group(r"([0-9]{2}RO[A-Z0-9]+)"),
        ),
        FieldRule::new(
            "nrDeReferinta",
            Locator::NextLine,
            AnchorPattern::starts_with_ci("lrn"),
            CapturePattern::group(r"([A-Za-z0-9-]+)"),
        ),
        // "Valoare statistică: 345,67"
        FieldRule::new(
            "valoareStatistica",
            Locator::SameLine,
            AnchorPattern::contains_ci("valoare statistică"),
            CapturePattern::group(r"([\d.,]+)"),
        ),
        // Supporting-document line: "N380 4512/2024 factura"
        FieldRule::new(
            "referintaDocument",
            Locator::SameLine,
            AnchorPattern::starts_with("N380"),
            CapturePattern::group(r"N380\s+(\S+)"),
        ),
        // "Cuantumul taxelor" heading, A00 row below; the row reads
        // "A00 - 345,67 RON" so the amount is the first token after the code.
        FieldRule::new(
            "totalPlataA00",
            Locator::ForwardScan {
                until: AnchorPattern::starts_with("A00"),
            },
            AnchorPattern::contains_ci("cuantumul taxelor"),
            CapturePattern::split_after(r"A00\W*").first_token(),
        ),
        // "Articole: 2"
        FieldRule::new(
            "nrArticole",
            Locator::SameLine,
            AnchorPattern::contains_ci("articole"),
            CapturePattern::group(r"(?i)articole\s*:?\s*(\d+)"),
        ),
        // Container number below its label, sometimes with a space
        // before the serial.
        FieldRule::new(
            "nrContainer",
            Locator::NextLine,
            AnchorPattern::contains_ci("container"),
            CapturePattern::group(r"([A-Z]{4}\s?\d{7})"),
        ),
    ]
}
