//! Error types for the vamex-core library.
//!
//! Only the document-producing boundary can fail. Inside the engine a
//! field that finds no anchor or whose capture does not match is simply
//! absent from the result, never an error.

use thiserror::Error;

/// Main error type for the vamex library.
#[derive(Error, Debug)]
pub enum VamexError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// No rule set registered under the requested variant name.
    #[error("unknown variant: {0}")]
    UnknownVariant(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Result type for the vamex library.
pub type Result<T> = std::result::Result<T, VamexError>;
