//! PDF processing module.
//!
//! Text-only: the engine works on flattened page text, and scanned
//! declarations are out of scope. A PDF from which no text can be
//! produced surfaces as a per-document error in the batch output.

mod extractor;

pub use extractor::PdfExtractor;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF text sources.
pub trait PdfTextSource {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract the flattened text of the whole document, page order
    /// preserved, pages joined by line breaks.
    fn extract_text(&self) -> Result<String>;
}
