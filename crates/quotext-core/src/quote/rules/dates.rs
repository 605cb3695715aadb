//! Date normalization for m/d/yyyy quote dates.

use chrono::NaiveDate;

/// Re-render a strict `m/d/yyyy` date (1-2 digit month/day) as zero-padded
/// `mm/dd/yyyy`. Unparseable input passes through unchanged rather than
/// failing; the operation is idempotent on already-normalized strings.
pub fn normalize_date(date_str: &str) -> String {
    match NaiveDate::parse_from_str(date_str, "%m/%d/%Y") {
        Ok(date) => date.format("%m/%d/%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}
