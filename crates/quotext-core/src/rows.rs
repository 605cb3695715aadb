//! Row builder: joins header, line items, and batch defaults into flat
//! 25-column output rows.

use crate::models::config::BatchDefaults;
use crate::models::quote::{LineItem, QuoteHeader};
use crate::models::row::OutputRow;
use crate::quote::rules::{normalize_date, parse_amount};

/// Build one [`OutputRow`] per line item.
///
/// Header-derived fields are copied verbatim into every row so they are
/// identical across a document's rows. The referral manager is the header's
/// salesperson when present, else the batch fallback, else unset. Numeric
/// and date coercion failures degrade silently: amounts stay unset (not
/// zero) and dates pass through as found.
pub fn build_rows(
    header: &QuoteHeader,
    items: &[LineItem],
    defaults: &BatchDefaults,
    filename: &str,
) -> Vec<OutputRow> {
    let referral_manager = header
        .referral_manager
        .as_deref()
        .or_else(|| defaults.fallback_referral_manager())
        .map(str::to_string);
    let referral_email = defaults.referral_email().map(str::to_string);
    let brand = defaults.brand().map(str::to_string);

    let quote_date = header.quote_date.as_deref().map(normalize_date);
    let quote_valid_date = header.quote_valid_date.as_deref().map(normalize_date);

    items
        .iter()
        .map(|item| OutputRow {
            referral_manager: referral_manager.clone(),
            referral_email: referral_email.clone(),
            brand: brand.clone(),
            quote_number: header.quote_number.clone(),
            quote_date: quote_date.clone(),
            company: header.company.clone(),
            first_name: header.first_name.clone(),
            last_name: header.last_name.clone(),
            contact_email: None,
            contact_phone: None,
            address: header.address.clone(),
            county: None,
            city: header.city.clone(),
            state: header.state.clone(),
            zip_code: header.zip_code.clone(),
            country: header.country.clone(),
            item_id: item.item_id.clone(),
            item_desc: item.description.clone(),
            unit_price: parse_amount(&item.unit_price),
            total_sales: parse_amount(&item.total),
            quote_valid_date: quote_valid_date.clone(),
            customer_number: header.customer_number.clone(),
            manufacturer_name: None,
            pdf: filename.to_string(),
            demo_quote: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(id: &str, unit_price: &str, total: &str) -> LineItem {
        LineItem {
            line_number: "1".to_string(),
            item_id: id.to_string(),
            quantity: "100".to_string(),
            unit_price: unit_price.to_string(),
            total: total.to_string(),
            description: format!("{} description", id),
        }
    }

    #[test]
    fn test_one_row_per_item() {
        let header = QuoteHeader::default();
        let items = vec![
            item("A.1", "1.00000", "1.00"),
            item("B.2", "2.00000", "2.00"),
        ];
        let rows = build_rows(&header, &items, &BatchDefaults::default(), "q.pdf");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].item_id, "A.1");
        assert_eq!(rows[1].item_id, "B.2");
    }

    #[test]
    fn test_numeric_coercion() {
        let items = vec![item("A.1", "3,350.00", "oops")];
        let rows = build_rows(
            &QuoteHeader::default(),
            &items,
            &BatchDefaults::default(),
            "q.pdf",
        );
        assert_eq!(rows[0].unit_price, Some(3350.0));
        // Unset on failure, not zero.
        assert_eq!(rows[0].total_sales, None);
    }

    #[test]
    fn test_salesperson_wins_over_fallback() {
        let header = QuoteHeader {
            referral_manager: Some("Jane Doe".to_string()),
            ..Default::default()
        };
        let defaults = BatchDefaults {
            fallback_referral_manager: Some("Pat Smith".to_string()),
            ..Default::default()
        };
        let rows = build_rows(&header, &[item("A.1", "1.00", "1.00")], &defaults, "q.pdf");
        assert_eq!(rows[0].referral_manager.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_fallback_used_when_no_salesperson() {
        let defaults = BatchDefaults {
            fallback_referral_manager: Some("Pat Smith".to_string()),
            ..Default::default()
        };
        let rows = build_rows(
            &QuoteHeader::default(),
            &[item("A.1", "1.00", "1.00")],
            &defaults,
            "q.pdf",
        );
        assert_eq!(rows[0].referral_manager.as_deref(), Some("Pat Smith"));
    }

    #[test]
    fn test_empty_defaults_leave_columns_unset() {
        let defaults = BatchDefaults {
            fallback_referral_manager: Some(String::new()),
            referral_email: Some(String::new()),
            brand: None,
        };
        let rows = build_rows(
            &QuoteHeader::default(),
            &[item("A.1", "1.00", "1.00")],
            &defaults,
            "q.pdf",
        );
        assert_eq!(rows[0].referral_manager, None);
        assert_eq!(rows[0].referral_email, None);
        assert_eq!(rows[0].brand, None);
    }

    #[test]
    fn test_dates_normalized_once_per_document() {
        let header = QuoteHeader {
            quote_date: Some("1/2/2026".to_string()),
            quote_valid_date: Some("not a date".to_string()),
            ..Default::default()
        };
        let rows = build_rows(
            &header,
            &[item("A.1", "1.00", "1.00")],
            &BatchDefaults::default(),
            "q.pdf",
        );
        assert_eq!(rows[0].quote_date.as_deref(), Some("01/02/2026"));
        // Unparseable date passes through unchanged.
        assert_eq!(rows[0].quote_valid_date.as_deref(), Some("not a date"));
    }

    #[test]
    fn test_header_fields_shared_across_rows() {
        let header = QuoteHeader {
            quote_number: Some("120987".to_string()),
            company: Some("Acme Co".to_string()),
            city: Some("Springfield".to_string()),
            customer_number: Some("100455".to_string()),
            ..Default::default()
        };
        let items = vec![
            item("A.1", "1.00", "1.00"),
            item("B.2", "2.00", "2.00"),
            item("C.3", "3.00", "3.00"),
        ];
        let rows = build_rows(&header, &items, &BatchDefaults::default(), "quote.pdf");

        for pair in rows.windows(2) {
            assert_eq!(pair[0].quote_number, pair[1].quote_number);
            assert_eq!(pair[0].company, pair[1].company);
            assert_eq!(pair[0].city, pair[1].city);
            assert_eq!(pair[0].customer_number, pair[1].customer_number);
            assert_eq!(pair[0].pdf, pair[1].pdf);
        }
    }

    #[test]
    fn test_reserved_columns_stay_unset() {
        let rows = build_rows(
            &QuoteHeader::default(),
            &[item("A.1", "1.00", "1.00")],
            &BatchDefaults::default(),
            "q.pdf",
        );
        assert!(rows[0].contact_email.is_none());
        assert!(rows[0].contact_phone.is_none());
        assert!(rows[0].county.is_none());
        assert!(rows[0].manufacturer_name.is_none());
        assert!(rows[0].demo_quote.is_none());
    }

    #[test]
    fn test_filename_copied_verbatim() {
        let rows = build_rows(
            &QuoteHeader::default(),
            &[item("A.1", "1.00", "1.00")],
            &BatchDefaults::default(),
            "Quote #42 (rev B).pdf",
        );
        assert_eq!(rows[0].pdf, "Quote #42 (rev B).pdf");
    }
}
