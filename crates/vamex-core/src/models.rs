//! Per-document record and configuration models.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VamexError};
use crate::extract::ExtractionResult;

/// Fields any plausible declaration print carries at least one of.
/// A record matching none of them was extracted from the wrong kind of
/// document (or with the wrong variant).
pub const EXPECTED_FIELDS: &[&str] = &[
    "nrDestinatar",
    "mrn",
    "nrArticole",
    "referintaDocument",
    "nrContainer",
];

/// One document's extraction outcome, as emitted in the batch output.
///
/// Serializes to a flat object: `file`, the matched fields inlined, and
/// `error` only when the document text could not be produced at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Source file name.
    pub file: String,

    /// Matched fields; absent fields have no key.
    #[serde(flatten)]
    pub fields: ExtractionResult,

    /// Upstream failure description, in place of fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DocumentRecord {
    pub fn new(file: impl Into<String>, fields: ExtractionResult) -> Self {
        Self {
            file: file.into(),
            fields,
            error: None,
        }
    }

    /// Record for a document whose text could not be produced.
    pub fn failed(file: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            fields: ExtractionResult::new(),
            error: Some(error.into()),
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Whether any of the structurally expected fields was captured.
    pub fn has_expected_fields(&self) -> bool {
        EXPECTED_FIELDS
            .iter()
            .any(|f| self.field(f).is_some_and(|v| !v.is_empty()))
    }
}

/// Runtime configuration for the batch driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VamexConfig {
    /// Variant used when none is given on the command line.
    pub default_variant: String,

    /// Billing prices, in the invoicing currency.
    pub billing: BillingConfig,
}

impl Default for VamexConfig {
    fn default() -> Self {
        Self {
            default_variant: "h1".to_owned(),
            billing: BillingConfig::default(),
        }
    }
}

/// Fixed service prices for the billing CSV rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingConfig {
    pub declaration_price: String,
    pub transit_price: String,
    pub extra_article_price: String,
    pub physical_control_price: String,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            declaration_price: "50".to_owned(),
            transit_price: "75".to_owned(),
            extra_article_price: "5".to_owned(),
            physical_control_price: "22".to_owned(),
        }
    }
}

impl VamexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| VamexError::Config(format!("{}: {}", path.display(), e)))
    }
}
