//! PDF processing module.

mod extractor;

pub use extractor::PdfTextExtractor;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF text extraction implementations.
///
/// The contract the parsing pipeline depends on: given PDF bytes, produce a
/// single page-ordered plain-text string. Pages that render no text
/// contribute nothing; undecodable input is an error, with no partial-text
/// fallback.
pub trait TextExtractor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract text from the entire PDF, pages concatenated in document order.
    fn extract_text(&self) -> Result<String>;
}
