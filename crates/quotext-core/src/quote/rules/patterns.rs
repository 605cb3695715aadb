//! Anchored regex patterns for the quote layout family.
//!
//! All probes are case-sensitive and anchored to literal label text, and
//! tolerate arbitrary whitespace runs between tokens.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // "Quote 120987 Date 11/24/2025"
    pub static ref QUOTE_NUMBER_DATE: Regex = Regex::new(
        r"Quote\s+(\d+)\s+Date\s+(\d{1,2}/\d{1,2}/\d{4})"
    ).unwrap();

    // "Customer 100455"
    pub static ref CUSTOMER_NUMBER: Regex = Regex::new(
        r"Customer\s+(\d+)"
    ).unwrap();

    // "Contact John Q. Public"
    pub static ref CONTACT_NAME: Regex = Regex::new(
        r"Contact\s+([A-Za-z .'-]+)"
    ).unwrap();

    // "Salesperson Jane Doe"
    pub static ref SALESPERSON: Regex = Regex::new(
        r"Salesperson\s+([A-Za-z .'-]+)"
    ).unwrap();

    // Company name between the bill-to and ship-to labels.
    pub static ref COMPANY: Regex = Regex::new(
        r"Quoted For:\s*(.+?)\s+Ship To:"
    ).unwrap();

    // Street address: leading house-number chunk up to a second embedded
    // house-number pattern. The address block repeats the bill-to/ship-to
    // address format back-to-back; the second house number marks where the
    // first address ends.
    pub static ref STREET_ADDRESS: Regex = Regex::new(
        r"(\d{3,6}\s+[A-Za-z0-9 .]+?)\s+\d{3,6}\s+[A-Za-z0-9 ]+"
    ).unwrap();

    // "Springfield, IL 62704" with an optional ignored zip+4 extension.
    pub static ref CITY_STATE_ZIP: Regex = Regex::new(
        r"([A-Za-z .]+),\s*([A-Z]{2})\s+(\d{5})(?:-\d{4})?"
    ).unwrap();

    // "Quote Good Through 12/24/2025"
    pub static ref QUOTE_VALID_DATE: Regex = Regex::new(
        r"Quote Good Through\s+(\d{1,2}/\d{1,2}/\d{4})"
    ).unwrap();

    // Tabular line item:
    // "1 COP2.750.BLACK 100 FT 33,500.00000 MFT 3,350.00"
    // line-no, item-id, quantity, unit, unit price, unit, total.
    pub static ref LINE_ITEM: Regex = Regex::new(
        r"^(\d+)\s+([A-Z0-9.\-]+)\s+(\d+)\s+[A-Z/]+\s+([\d,]+\.\d+)\s*[A-Z/]+\s+([\d,]+\.\d{2})$"
    ).unwrap();

    // "Tax 1,234.56" within the order-summary region.
    pub static ref TAX_AMOUNT: Regex = Regex::new(
        r"\bTax\s+([\d,]+\.\d{2})"
    ).unwrap();
}

/// Anchor opening the address block.
pub const QUOTED_FOR_ANCHOR: &str = "Quoted For:";

/// Anchor closing the address block.
pub const GOOD_THROUGH_ANCHOR: &str = "Quote Good Through";

/// Literal whose presence in the address block marks a US address.
pub const USA_MARKER: &str = "United States of America";

/// Anchor opening the order-summary region.
pub const SUMMARY_START_ANCHOR: &str = "Product";

/// Anchor closing the order-summary region.
pub const SUMMARY_END_ANCHOR: &str = "Total";
