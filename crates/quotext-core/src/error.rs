//! Error types for the quotext-core library.

use thiserror::Error;

use crate::batch::DocumentWarning;

/// Main error type for the quotext library.
#[derive(Error, Debug)]
pub enum QuotextError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Batch-level error.
    #[error("batch error: {0}")]
    Batch(#[from] BatchError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
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

/// Errors that abort an entire batch run.
///
/// Per-document failures are not errors at this level; they are contained as
/// [`DocumentWarning`] values and the run continues. Field coercion failures
/// (numbers, dates) never surface at all - they degrade to unset fields.
#[derive(Error, Debug)]
pub enum BatchError {
    /// More documents were submitted than the batch cap allows. Rejected
    /// before any extraction runs.
    #[error("batch of {submitted} documents exceeds the {limit}-document limit")]
    SizeExceeded { submitted: usize, limit: usize },

    /// Zero documents were submitted.
    #[error("no documents submitted")]
    Empty,

    /// The batch completed but no document yielded any line item.
    #[error("no line items were extracted from {attempted} document(s)")]
    NoData {
        attempted: usize,
        warnings: Vec<DocumentWarning>,
    },
}

/// Result type for the quotext library.
pub type Result<T> = std::result::Result<T, QuotextError>;
