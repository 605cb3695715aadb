//! Numeric coercion for locale-formatted amounts.

/// Parse an amount string with optional comma thousands separators
/// ("3,350.00" -> 3350.0).
///
/// Failure is `None`, never an error: field coercion is deliberately
/// tolerant of noisy input and must not abort row construction.
pub fn parse_amount(s: &str) -> Option<f64> {
    s.replace(',', "").trim().parse::<f64>().ok()
}
