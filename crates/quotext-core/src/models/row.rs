//! Flat output row conforming to the fixed 25-column export schema.

use serde::{Deserialize, Serialize};

/// One export row: header fields fanned out per line item, plus batch
/// defaults and the source filename.
///
/// Every row carries exactly the columns in [`OutputRow::COLUMNS`], in that
/// order. Rows are immutable after construction; header-derived fields are
/// identical across all rows of the same source document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputRow {
    #[serde(rename = "ReferralManager")]
    pub referral_manager: Option<String>,

    #[serde(rename = "ReferralEmail")]
    pub referral_email: Option<String>,

    #[serde(rename = "Brand")]
    pub brand: Option<String>,

    #[serde(rename = "QuoteNumber")]
    pub quote_number: Option<String>,

    /// Rendered mm/dd/yyyy, or the source text if it would not parse.
    #[serde(rename = "QuoteDate")]
    pub quote_date: Option<String>,

    #[serde(rename = "Company")]
    pub company: Option<String>,

    #[serde(rename = "FirstName")]
    pub first_name: Option<String>,

    #[serde(rename = "LastName")]
    pub last_name: Option<String>,

    /// Reserved column; no extraction source yet.
    #[serde(rename = "ContactEmail")]
    pub contact_email: Option<String>,

    /// Reserved column; no extraction source yet.
    #[serde(rename = "ContactPhone")]
    pub contact_phone: Option<String>,

    #[serde(rename = "Address")]
    pub address: Option<String>,

    /// Reserved column; no extraction source yet.
    #[serde(rename = "County")]
    pub county: Option<String>,

    #[serde(rename = "City")]
    pub city: Option<String>,

    #[serde(rename = "State")]
    pub state: Option<String>,

    #[serde(rename = "ZipCode")]
    pub zip_code: Option<String>,

    #[serde(rename = "Country")]
    pub country: Option<String>,

    #[serde(rename = "item_id")]
    pub item_id: String,

    #[serde(rename = "item_desc")]
    pub item_desc: String,

    /// Numeric unit price, unset when the source text would not coerce.
    #[serde(rename = "UnitPrice")]
    pub unit_price: Option<f64>,

    /// Numeric line total, unset when the source text would not coerce.
    #[serde(rename = "TotalSales")]
    pub total_sales: Option<f64>,

    #[serde(rename = "QuoteValidDate")]
    pub quote_valid_date: Option<String>,

    #[serde(rename = "CustomerNumber")]
    pub customer_number: Option<String>,

    /// Reserved column; no extraction source yet.
    #[serde(rename = "manufacturer_Name")]
    pub manufacturer_name: Option<String>,

    /// Source filename, verbatim, for traceability back to the upload.
    #[serde(rename = "PDF")]
    pub pdf: String,

    /// Reserved column; no extraction source yet.
    #[serde(rename = "DemoQuote")]
    pub demo_quote: Option<String>,
}

impl OutputRow {
    /// Canonical column names, in export order.
    pub const COLUMNS: [&'static str; 25] = [
        "ReferralManager",
        "ReferralEmail",
        "Brand",
        "QuoteNumber",
        "QuoteDate",
        "Company",
        "FirstName",
        "LastName",
        "ContactEmail",
        "ContactPhone",
        "Address",
        "County",
        "City",
        "State",
        "ZipCode",
        "Country",
        "item_id",
        "item_desc",
        "UnitPrice",
        "TotalSales",
        "QuoteValidDate",
        "CustomerNumber",
        "manufacturer_Name",
        "PDF",
        "DemoQuote",
    ];

    /// Column values as display strings, aligned with [`Self::COLUMNS`].
    /// Unset fields render as empty strings. Used by CSV-style sinks; the
    /// xlsx writer reads the numeric fields directly to keep them numeric.
    pub fn to_record(&self) -> [String; 25] {
        fn opt(s: &Option<String>) -> String {
            s.clone().unwrap_or_default()
        }
        fn num(v: &Option<f64>) -> String {
            v.map(|n| n.to_string()).unwrap_or_default()
        }

        [
            opt(&self.referral_manager),
            opt(&self.referral_email),
            opt(&self.brand),
            opt(&self.quote_number),
            opt(&self.quote_date),
            opt(&self.company),
            opt(&self.first_name),
            opt(&self.last_name),
            opt(&self.contact_email),
            opt(&self.contact_phone),
            opt(&self.address),
            opt(&self.county),
            opt(&self.city),
            opt(&self.state),
            opt(&self.zip_code),
            opt(&self.country),
            self.item_id.clone(),
            self.item_desc.clone(),
            num(&self.unit_price),
            num(&self.total_sales),
            opt(&self.quote_valid_date),
            opt(&self.customer_number),
            opt(&self.manufacturer_name),
            self.pdf.clone(),
            opt(&self.demo_quote),
        ]
    }
}
