//! Quote data models extracted from a single document.

use serde::{Deserialize, Serialize};

/// One uploaded document: a filename and its raw bytes.
///
/// Owned by the batch orchestrator for the duration of a run.
#[derive(Debug, Clone)]
pub struct RawDocument {
    /// Original filename, preserved verbatim for traceability.
    pub name: String,
    /// Raw PDF bytes.
    pub bytes: Vec<u8>,
}

impl RawDocument {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// Quote-level metadata recovered from the document header area.
///
/// Every field is independently optional: a pattern that does not match
/// simply leaves its field unset, never an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoteHeader {
    /// Quote number ("Quote 120987 ...").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_number: Option<String>,

    /// Quote date as found in the document (m/d/yyyy).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_date: Option<String>,

    /// Customer account number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_number: Option<String>,

    /// Contact given name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Contact family name (remaining tokens of the contact name).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Salesperson, mapped to the ReferralManager column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_manager: Option<String>,

    /// Billed company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Two-letter state code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Five-digit zip (zip+4 extension dropped).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// "Quote Good Through" date as found (m/d/yyyy).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_valid_date: Option<String>,
}

/// Line-number tag used for the synthetic tax item.
pub const TAX_LINE_NUMBER: &str = "TAX";

/// A single product line on the quote.
///
/// All fields carry the source text verbatim; numeric coercion happens in
/// the row builder so that a malformed amount degrades to an unset column
/// instead of rejecting the item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Ordinal on the quote, or the literal tag "TAX" for the synthetic
    /// tax item.
    pub line_number: String,

    /// Item identifier (uppercase alphanumeric/dot/hyphen token).
    pub item_id: String,

    /// Quantity as found.
    pub quantity: String,

    /// Unit price, locale-formatted with comma thousands separators.
    pub unit_price: String,

    /// Line total, same format as the unit price.
    pub total: String,

    /// Description, taken verbatim from the line following the tabular
    /// match. May be empty.
    pub description: String,
}

impl LineItem {
    /// Whether this is the synthetic tax item.
    pub fn is_tax(&self) -> bool {
        self.line_number == TAX_LINE_NUMBER
    }
}

/// Everything recovered from one document's text.
#[derive(Debug, Clone, Default)]
pub struct ParsedQuote {
    /// Quote-level header fields.
    pub header: QuoteHeader,

    /// Line items in source order; the synthetic tax item, if any, is last.
    pub items: Vec<LineItem>,

    /// Advisory notes about fields that could not be extracted.
    pub warnings: Vec<String>,
}
