//! Export sinks: xlsx workbook for extracted rows, zip archive for the
//! source PDFs.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};
use tracing::info;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use quotext_core::{OutputRow, RawDocument};

// COLUMNS indices of the two numeric columns.
const UNIT_PRICE_COL: u16 = 18;
const TOTAL_SALES_COL: u16 = 19;

/// Write rows to an xlsx workbook with a single "Quotes" sheet.
///
/// Header row is bold; UnitPrice and TotalSales are written as numbers so
/// spreadsheet formulas work on them, everything else as text.
pub fn write_workbook(path: &Path, rows: &[OutputRow]) -> anyhow::Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Quotes")?;

    let header_format = Format::new().set_bold();
    let money_format = Format::new().set_num_format("#,##0.00");

    for (col, name) in OutputRow::COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *name, &header_format)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        let record = row.to_record();

        for (col, value) in record.iter().enumerate() {
            let col = col as u16;
            match col {
                UNIT_PRICE_COL => {
                    if let Some(v) = row.unit_price {
                        worksheet.write_number_with_format(r, col, v, &money_format)?;
                    }
                }
                TOTAL_SALES_COL => {
                    if let Some(v) = row.total_sales {
                        worksheet.write_number_with_format(r, col, v, &money_format)?;
                    }
                }
                _ => {
                    if !value.is_empty() {
                        worksheet.write_string(r, col, value)?;
                    }
                }
            }
        }
    }

    // Wide enough for item ids and filenames without autofit.
    worksheet.set_column_width(16, 20)?; // item_id
    worksheet.set_column_width(17, 40)?; // item_desc
    worksheet.set_column_width(23, 28)?; // PDF

    workbook.save(path)?;
    info!("Wrote {} row(s) to {}", rows.len(), path.display());
    Ok(())
}

/// Bundle the original uploads into a zip archive, one entry per document,
/// named by the upload filename.
pub fn write_archive(path: &Path, documents: &[RawDocument]) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for document in documents {
        zip.start_file(document.name.as_str(), options)?;
        zip.write_all(&document.bytes)?;
    }

    zip.finish()?;
    info!(
        "Archived {} document(s) to {}",
        documents.len(),
        path.display()
    );
    Ok(())
}
