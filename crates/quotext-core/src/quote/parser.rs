//! Layered quote parser combining the header, line-item, and tax rules.

use tracing::{debug, info};

use crate::models::quote::ParsedQuote;

use super::rules::{extract_header, extract_line_items, extract_tax_item};

/// Trait for quote parsing.
pub trait QuoteParser {
    /// Parse a quote from full document text. Never fails: absent fields
    /// stay unset and are noted as advisory warnings.
    fn parse(&self, text: &str) -> ParsedQuote;
}

/// Parser for the fixed quote layout family, built on anchored patterns and
/// the next-line description convention.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutQuoteParser;

impl LayoutQuoteParser {
    pub fn new() -> Self {
        Self
    }
}

impl QuoteParser for LayoutQuoteParser {
    fn parse(&self, text: &str) -> ParsedQuote {
        let mut warnings = Vec::new();

        info!("Parsing quote from {} characters of text", text.len());

        let header = extract_header(text);
        if header.quote_number.is_none() {
            warnings.push("Could not extract quote number".to_string());
        }
        if header.referral_manager.is_none() {
            warnings.push("Could not extract salesperson".to_string());
        }

        let mut items = extract_line_items(text);
        if items.is_empty() {
            warnings.push("Could not extract line items".to_string());
        }

        // The synthetic tax item, if any, always follows the ordinary items.
        if let Some(tax_item) = extract_tax_item(text) {
            debug!("Detected non-zero tax line: {}", tax_item.total);
            items.push(tax_item);
        }

        debug!(
            "Extracted quote {:?} with {} line item(s)",
            header.quote_number,
            items.len()
        );

        ParsedQuote {
            header,
            items,
            warnings,
        }
    }
}
