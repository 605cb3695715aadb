//! Batch orchestration: sequential per-document extraction with failure
//! isolation.

use std::marker::PhantomData;

use tracing::{debug, warn};

use crate::error::{BatchError, QuotextError};
use crate::models::config::BatchDefaults;
use crate::models::quote::RawDocument;
use crate::models::row::OutputRow;
use crate::pdf::{PdfTextExtractor, TextExtractor};
use crate::quote::{LayoutQuoteParser, QuoteParser};
use crate::rows::build_rows;

/// Inclusive cap on documents per batch run.
pub const MAX_DOCUMENTS: usize = 100;

/// A contained per-document failure. The named document contributed zero
/// rows; the batch continued.
#[derive(Debug, Clone)]
pub struct DocumentWarning {
    /// Source filename of the failed document.
    pub filename: String,
    /// Underlying cause, already rendered for display.
    pub cause: String,
}

impl std::fmt::Display for DocumentWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error processing {}: {}", self.filename, self.cause)
    }
}

/// Aggregate result of a batch run.
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// All output rows, in document order, item order preserved within a
    /// document.
    pub rows: Vec<OutputRow>,
    /// Number of documents attempted (successful or not).
    pub documents_attempted: usize,
    /// Per-document failures contained during the run.
    pub warnings: Vec<DocumentWarning>,
}

/// Sequential batch processor.
///
/// Documents are processed one at a time in upload order. A document either
/// contributes all its rows or none: any failure inside the per-document
/// pipeline is caught here, recorded as a warning, and the run continues.
/// Generic over the [`TextExtractor`] implementation; defaults to the PDF
/// extractor.
pub struct BatchProcessor<E = PdfTextExtractor> {
    defaults: BatchDefaults,
    parser: LayoutQuoteParser,
    extractor: PhantomData<E>,
}

impl BatchProcessor {
    /// Create a processor backed by [`PdfTextExtractor`].
    pub fn new(defaults: BatchDefaults) -> Self {
        Self::with_extractor(defaults)
    }
}

impl<E: TextExtractor + Default> BatchProcessor<E> {
    /// Create a processor backed by a specific extractor implementation.
    pub fn with_extractor(defaults: BatchDefaults) -> Self {
        Self {
            defaults,
            parser: LayoutQuoteParser::new(),
            extractor: PhantomData,
        }
    }

    /// Run the full pipeline over a batch of documents.
    ///
    /// Batch-level failures: [`BatchError::Empty`] for zero documents,
    /// [`BatchError::SizeExceeded`] above [`MAX_DOCUMENTS`] (rejected before
    /// any extraction runs), and [`BatchError::NoData`] when the completed
    /// run produced zero rows.
    pub fn process(&self, documents: &[RawDocument]) -> Result<BatchResult, BatchError> {
        if documents.is_empty() {
            return Err(BatchError::Empty);
        }
        if documents.len() > MAX_DOCUMENTS {
            return Err(BatchError::SizeExceeded {
                submitted: documents.len(),
                limit: MAX_DOCUMENTS,
            });
        }

        let mut rows = Vec::new();
        let mut warnings = Vec::new();

        for document in documents {
            match self.process_document(document) {
                Ok(document_rows) => {
                    debug!(
                        "Extracted {} row(s) from {}",
                        document_rows.len(),
                        document.name
                    );
                    rows.extend(document_rows);
                }
                Err(e) => {
                    warn!("Failed to process {}: {}", document.name, e);
                    warnings.push(DocumentWarning {
                        filename: document.name.clone(),
                        cause: e.to_string(),
                    });
                }
            }
        }

        if rows.is_empty() {
            return Err(BatchError::NoData {
                attempted: documents.len(),
                warnings,
            });
        }

        Ok(BatchResult {
            rows,
            documents_attempted: documents.len(),
            warnings,
        })
    }

    /// The per-document pipeline: bytes -> text -> parsed quote -> rows.
    pub fn process_document(&self, document: &RawDocument) -> Result<Vec<OutputRow>, QuotextError> {
        let mut extractor = E::default();
        extractor.load(&document.bytes)?;
        let text = extractor.extract_text()?;
        Ok(self.rows_from_text(&text, &document.name))
    }

    /// Parse already-extracted text and build its rows.
    pub fn rows_from_text(&self, text: &str, filename: &str) -> Vec<OutputRow> {
        let parsed = self.parser.parse(text);
        build_rows(&parsed.header, &parsed.items, &self.defaults, filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PdfError;
    use crate::pdf::Result as PdfResult;
    use pretty_assertions::assert_eq;

    const QUOTE_TEXT: &str = "\
Quote 120987 Date 11/24/2025\n\
Salesperson Jane Doe\n\
1 COP2.750.BLACK 100 FT 33,500.00000 MFT 3,350.00\n\
Black Jacketed Copper Wire\n";

    /// Treats document bytes as already-extracted text; bytes starting with
    /// "FAIL" refuse to load.
    #[derive(Default)]
    struct StubExtractor {
        text: String,
        loaded: bool,
    }

    impl TextExtractor for StubExtractor {
        fn load(&mut self, data: &[u8]) -> PdfResult<()> {
            if data.starts_with(b"FAIL") {
                return Err(PdfError::Parse("stub refused to load".to_string()));
            }
            self.text = String::from_utf8_lossy(data).into_owned();
            self.loaded = true;
            Ok(())
        }

        fn page_count(&self) -> u32 {
            u32::from(self.loaded)
        }

        fn extract_text(&self) -> PdfResult<String> {
            Ok(self.text.clone())
        }
    }

    fn doc(name: &str, bytes: &[u8]) -> RawDocument {
        RawDocument::new(name, bytes.to_vec())
    }

    fn stub_processor() -> BatchProcessor<StubExtractor> {
        BatchProcessor::with_extractor(BatchDefaults::default())
    }

    #[test]
    fn test_empty_batch_rejected() {
        let processor = stub_processor();
        assert!(matches!(processor.process(&[]), Err(BatchError::Empty)));
    }

    #[test]
    fn test_cap_is_inclusive() {
        let processor = stub_processor();

        let over: Vec<RawDocument> = (0..MAX_DOCUMENTS + 1)
            .map(|i| doc(&format!("{}.pdf", i), QUOTE_TEXT.as_bytes()))
            .collect();
        match processor.process(&over) {
            Err(BatchError::SizeExceeded { submitted, limit }) => {
                assert_eq!(submitted, 101);
                assert_eq!(limit, 100);
            }
            other => panic!("expected SizeExceeded, got {:?}", other),
        }

        // Exactly 100 documents is accepted (inclusive boundary).
        let at_cap: Vec<RawDocument> = (0..MAX_DOCUMENTS)
            .map(|i| doc(&format!("{}.pdf", i), QUOTE_TEXT.as_bytes()))
            .collect();
        let result = processor.process(&at_cap).unwrap();
        assert_eq!(result.documents_attempted, 100);
        assert_eq!(result.rows.len(), 100);
    }

    #[test]
    fn test_batch_isolation() {
        let processor = stub_processor();
        let documents = vec![
            doc("first.pdf", QUOTE_TEXT.as_bytes()),
            doc("second.pdf", b"FAIL"),
            doc("third.pdf", QUOTE_TEXT.as_bytes()),
        ];

        let result = processor.process(&documents).unwrap();

        // Rows from documents 1 and 3 only, in document order.
        assert_eq!(result.rows.len(), 2);
        assert_eq!(result.rows[0].pdf, "first.pdf");
        assert_eq!(result.rows[1].pdf, "third.pdf");

        // Exactly one warning referencing document 2.
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].filename, "second.pdf");
        assert!(result.warnings[0].cause.contains("stub refused to load"));
    }

    #[test]
    fn test_all_failures_yield_no_data_with_warnings() {
        let processor = stub_processor();
        let documents = vec![doc("a.pdf", b"FAIL"), doc("b.pdf", b"FAIL")];

        match processor.process(&documents) {
            Err(BatchError::NoData {
                attempted,
                warnings,
            }) => {
                assert_eq!(attempted, 2);
                assert_eq!(warnings.len(), 2);
                assert_eq!(warnings[0].filename, "a.pdf");
            }
            other => panic!("expected NoData, got {:?}", other),
        }
    }

    #[test]
    fn test_itemless_documents_are_no_data_without_warnings() {
        let processor = stub_processor();
        let documents = vec![doc("empty.pdf", b"no quote content here")];

        match processor.process(&documents) {
            Err(BatchError::NoData { warnings, .. }) => assert!(warnings.is_empty()),
            other => panic!("expected NoData, got {:?}", other),
        }
    }

    #[test]
    fn test_rows_from_text_pipeline() {
        let processor = BatchProcessor::new(BatchDefaults {
            brand: Some("Cadre Wire Group".to_string()),
            ..Default::default()
        });

        let rows = processor.rows_from_text(QUOTE_TEXT, "quote.pdf");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].quote_number.as_deref(), Some("120987"));
        assert_eq!(rows[0].referral_manager.as_deref(), Some("Jane Doe"));
        assert_eq!(rows[0].brand.as_deref(), Some("Cadre Wire Group"));
        assert_eq!(rows[0].item_id, "COP2.750.BLACK");
        assert_eq!(rows[0].item_desc, "Black Jacketed Copper Wire");
        assert_eq!(rows[0].unit_price, Some(33500.0));
        assert_eq!(rows[0].total_sales, Some(3350.0));
        assert_eq!(rows[0].pdf, "quote.pdf");
    }

    #[test]
    fn test_end_to_end_example() {
        let text = "\
Quote 120987 Date 11/24/2025\n\
Salesperson Jane Doe\n\
Quoted For: Acme Co Ship To: Acme Co\n\
1200 Industrial Way 1200 Industrial Way\n\
Springfield, IL 62704 Springfield, IL 62704\n\
Quote Good Through 12/24/2025\n\
1 COP2.750.BLACK 100 FT 33,500.00000 MFT 3,350.00\n\
Black Jacketed Copper Wire\n";

        let processor = BatchProcessor::new(BatchDefaults::default());
        let rows = processor.rows_from_text(text, "quote.pdf");

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.quote_number.as_deref(), Some("120987"));
        assert_eq!(row.quote_date.as_deref(), Some("11/24/2025"));
        assert_eq!(row.referral_manager.as_deref(), Some("Jane Doe"));
        assert_eq!(row.company.as_deref(), Some("Acme Co"));
        assert_eq!(row.item_id, "COP2.750.BLACK");
        assert_eq!(row.item_desc, "Black Jacketed Copper Wire");
        assert_eq!(row.unit_price, Some(33500.0));
        assert_eq!(row.total_sales, Some(3350.0));
    }

    #[test]
    fn test_row_count_conservation_with_tax() {
        let text = format!("{}Product\nTax 97.20\nTotal 3,447.20\n", QUOTE_TEXT);
        let processor = BatchProcessor::new(BatchDefaults::default());
        let rows = processor.rows_from_text(&text, "quote.pdf");

        // one ordinary item + one qualifying tax line
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].item_id, "Tax");
        assert_eq!(rows[1].unit_price, Some(97.2));
    }
}
