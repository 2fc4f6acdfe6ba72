//! Core library for Romanian customs declaration extraction.
//!
//! This crate provides:
//! - PDF text flattening (the document-producing boundary)
//! - A rule-based field-extraction engine: anchors, captures, and
//!   locator strategies over normalized line sequences
//! - Fixed rule sets for the known declaration layouts (H1, H7, EX1, T1)
//! - The per-document record model for batch output
//!
//! The engine itself is total: evaluating a rule set against any string
//! input never fails, and a field with no match is simply absent.

pub mod document;
pub mod error;
pub mod extract;
pub mod models;
pub mod pdf;
pub mod variants;

pub use document::DocumentText;
pub use error::{Result, VamexError};
pub use extract::{AnchorPattern, CapturePattern, ExtractionResult, FieldRule, Locator, RuleSet};
pub use models::{DocumentRecord, VamexConfig, EXPECTED_FIELDS};
pub use pdf::{PdfExtractor, PdfTextSource};
