//! Synthetic tax line detection in the order-summary region.

use crate::models::quote::{LineItem, TAX_LINE_NUMBER};

use super::amounts::parse_amount;
use super::patterns::{SUMMARY_END_ANCHOR, SUMMARY_START_ANCHOR, TAX_AMOUNT};

/// Amounts below this are treated as zero tax.
const TAX_EPSILON: f64 = 0.005;

/// Detect a non-zero tax amount and synthesize it as a line item.
///
/// When both "Product" and a subsequent "Total" literal appear, the search is
/// restricted to the substring between the first "Product" and the first
/// "Total" after it; otherwise the whole text is searched. A missing,
/// unparseable, or effectively-zero amount yields `None`.
pub fn extract_tax_item(full_text: &str) -> Option<LineItem> {
    let block = summary_block(full_text).unwrap_or(full_text);

    let caps = TAX_AMOUNT.captures(block)?;
    let amount_str = &caps[1];

    let value = parse_amount(amount_str)?;
    if value.abs() < TAX_EPSILON {
        // Tax is effectively zero - ignore
        return None;
    }

    Some(LineItem {
        line_number: TAX_LINE_NUMBER.to_string(),
        item_id: "Tax".to_string(),
        quantity: "1".to_string(),
        unit_price: amount_str.to_string(),
        total: amount_str.to_string(),
        description: "Tax".to_string(),
    })
}

fn summary_block(full_text: &str) -> Option<&str> {
    let start = full_text.find(SUMMARY_START_ANCHOR)?;
    let rest = &full_text[start..];
    let end = rest.find(SUMMARY_END_ANCHOR)?;
    Some(&rest[..end])
}
