//! Rule-based field extractors for the quote layout family.

pub mod amounts;
pub mod dates;
pub mod header;
pub mod items;
pub mod patterns;
pub mod tax;

pub use amounts::parse_amount;
pub use dates::normalize_date;
pub use header::extract_header;
pub use items::extract_line_items;
pub use tax::extract_tax_item;
