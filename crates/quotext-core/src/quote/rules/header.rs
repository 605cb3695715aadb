//! Header field extraction: quote metadata, contact, address block.

use crate::models::quote::QuoteHeader;

use super::patterns::{
    CITY_STATE_ZIP, COMPANY, CONTACT_NAME, CUSTOMER_NUMBER, GOOD_THROUGH_ANCHOR,
    QUOTED_FOR_ANCHOR, QUOTE_NUMBER_DATE, QUOTE_VALID_DATE, SALESPERSON, STREET_ADDRESS,
    USA_MARKER,
};

/// Extract quote-level fields from the full document text.
///
/// Never fails: each probe is independent and an absent match simply leaves
/// its field unset. The probes target disjoint label anchors, so their order
/// does not affect the result.
pub fn extract_header(full_text: &str) -> QuoteHeader {
    let mut header = QuoteHeader::default();

    if let Some(caps) = QUOTE_NUMBER_DATE.captures(full_text) {
        header.quote_number = Some(caps[1].to_string());
        header.quote_date = Some(caps[2].to_string());
    }

    if let Some(caps) = CUSTOMER_NUMBER.captures(full_text) {
        header.customer_number = Some(caps[1].to_string());
    }

    if let Some(caps) = CONTACT_NAME.captures(full_text) {
        let name = caps[1].trim();
        let mut parts = name.split_whitespace();
        if let Some(first) = parts.next() {
            header.first_name = Some(first.to_string());
            let rest: Vec<&str> = parts.collect();
            if !rest.is_empty() {
                header.last_name = Some(rest.join(" "));
            }
        }
    }

    if let Some(caps) = SALESPERSON.captures(full_text) {
        header.referral_manager = Some(caps[1].trim().to_string());
    }

    extract_address_block(full_text, &mut header);

    if let Some(caps) = QUOTE_VALID_DATE.captures(full_text) {
        header.quote_valid_date = Some(caps[1].to_string());
    }

    header
}

/// Address fields are located only within the substring strictly between the
/// first "Quoted For:" and the first "Quote Good Through"; if either anchor
/// is missing no address field is set.
fn extract_address_block(full_text: &str, header: &mut QuoteHeader) {
    let start = match full_text.find(QUOTED_FOR_ANCHOR) {
        Some(pos) => pos,
        None => return,
    };
    let end = match full_text.find(GOOD_THROUGH_ANCHOR) {
        Some(pos) => pos,
        None => return,
    };
    if end <= start {
        return;
    }
    let addr_block = &full_text[start..end];

    if let Some(caps) = COMPANY.captures(addr_block) {
        header.company = Some(caps[1].trim().to_string());
    }

    // The block holds a bill-to/ship-to pair repeating the address format
    // back-to-back; the capture stops before the second house number.
    if let Some(caps) = STREET_ADDRESS.captures(addr_block) {
        header.address = Some(caps[1].trim().to_string());
    }

    if let Some(caps) = CITY_STATE_ZIP.captures(addr_block) {
        header.city = Some(caps[1].trim().to_string());
        header.state = Some(caps[2].to_string());
        header.zip_code = Some(caps[3].to_string());
    }

    if addr_block.contains(USA_MARKER) {
        header.country = Some("USA".to_string());
    }
}
