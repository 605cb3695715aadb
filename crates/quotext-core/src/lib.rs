//! Core library for quote PDF extraction.
//!
//! This crate provides:
//! - PDF text extraction (page-ordered plain text from document bytes)
//! - Pattern-based quote field extraction (header, line items, tax line)
//! - Flat 25-column output rows for spreadsheet consumption
//! - Batch orchestration with per-document failure isolation

pub mod batch;
pub mod error;
pub mod models;
pub mod pdf;
pub mod quote;
pub mod rows;

pub use batch::{BatchProcessor, BatchResult, DocumentWarning, MAX_DOCUMENTS};
pub use error::{BatchError, PdfError, QuotextError, Result};
pub use models::config::{BatchDefaults, QuotextConfig};
pub use models::quote::{LineItem, ParsedQuote, QuoteHeader, RawDocument};
pub use models::row::OutputRow;
pub use pdf::{PdfTextExtractor, TextExtractor};
pub use quote::{LayoutQuoteParser, QuoteParser};
pub use rows::build_rows;
