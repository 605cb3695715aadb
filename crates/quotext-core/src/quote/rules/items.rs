//! Line-item extraction from the tabular region of the quote.

use crate::models::quote::LineItem;

use super::patterns::LINE_ITEM;

/// Extract all ordinary line items (no tax) in source order.
///
/// Each line is tested against the fixed tabular pattern; on a match the
/// immediately following line is taken verbatim as the description. That is
/// a positional convention of the source layout, not a semantic lookup: the
/// next line is used whatever its content, even if blank, and a match on the
/// last line yields an empty description. Non-matching lines are skipped
/// silently, and no item is ever rejected for a missing description.
pub fn extract_line_items(full_text: &str) -> Vec<LineItem> {
    let lines: Vec<&str> = full_text.lines().map(str::trim).collect();
    let mut items = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        let caps = match LINE_ITEM.captures(line) {
            Some(caps) => caps,
            None => continue,
        };

        let description = lines.get(idx + 1).copied().unwrap_or_default();

        items.push(LineItem {
            line_number: caps[1].to_string(),
            item_id: caps[2].to_string(),
            quantity: caps[3].to_string(),
            unit_price: caps[4].to_string(),
            total: caps[5].to_string(),
            description: description.to_string(),
        });
    }

    items
}
