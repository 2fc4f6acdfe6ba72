//! CLI subcommands.

pub mod batch;
pub mod billing;
pub mod extract;
pub mod variants;

use std::path::Path;

use vamex_core::{
    DocumentText, ExtractionResult, PdfExtractor, PdfTextSource, Result, RuleSet, VamexConfig,
    VamexError,
};

/// Load the config file if given, defaults otherwise.
pub fn load_config(config_path: Option<&str>) -> Result<VamexConfig> {
    match config_path {
        Some(path) => VamexConfig::from_file(Path::new(path)),
        None => Ok(VamexConfig::default()),
    }
}

/// Resolve a variant name against the registry.
pub fn resolve_variant(name: &str) -> Result<&'static RuleSet> {
    vamex_core::variants::named(name)
        .ok_or_else(|| VamexError::UnknownVariant(name.to_owned()))
}

/// Read one PDF, flatten its text, and run the rule set over it.
pub fn extract_file(path: &Path, rule_set: &RuleSet) -> Result<ExtractionResult> {
    let data = std::fs::read(path)?;

    let mut extractor = PdfExtractor::new();
    extractor.load(&data)?;
    let text = extractor.extract_text()?;

    let doc = DocumentText::new(&text);
    Ok(rule_set.extract(&doc))
}
