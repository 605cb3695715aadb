//! Batch command - process many quote PDFs into export artifacts.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use quotext_core::{BatchError, BatchProcessor, RawDocument};

use super::{load_config, DefaultsArgs};
use crate::export;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output workbook path
    #[arg(short, long, default_value = "quotes_extracted.xlsx")]
    output: PathBuf,

    /// Also bundle the original PDFs into a zip archive
    #[arg(long)]
    archive: Option<PathBuf>,

    /// Also generate a per-document summary CSV
    #[arg(long)]
    summary: Option<PathBuf>,

    #[command(flatten)]
    defaults: DefaultsArgs,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;
    let defaults = args.defaults.merge_into(&config);

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            ext.eq_ignore_ascii_case("pdf")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching PDF files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} file(s) to process",
        style("ℹ").blue(),
        files.len()
    );

    // Read all files up front so the workbook and the archive see the same
    // bytes under the same names.
    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut documents = Vec::with_capacity(files.len());
    for path in &files {
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("quote.pdf")
            .to_string();
        let bytes = fs::read(path)?;
        documents.push(RawDocument::new(name, bytes));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Extracting quote data...");

    let processor = BatchProcessor::new(defaults);
    let result = processor.process(&documents);
    spinner.finish_and_clear();

    let result = match result {
        Ok(result) => result,
        Err(BatchError::NoData {
            attempted,
            warnings,
        }) => {
            report_warnings(&warnings);
            anyhow::bail!(
                "No line items were found in the {} uploaded PDF(s)",
                attempted
            );
        }
        Err(e) => return Err(e.into()),
    };

    report_warnings(&result.warnings);

    export::write_workbook(&args.output, &result.rows)?;
    println!(
        "{} Workbook written to {}",
        style("✓").green(),
        args.output.display()
    );

    if let Some(archive_path) = &args.archive {
        export::write_archive(archive_path, &documents)?;
        println!(
            "{} Archive written to {}",
            style("✓").green(),
            archive_path.display()
        );
    }

    if let Some(summary_path) = &args.summary {
        write_summary(summary_path, &processor, &documents)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    println!();
    println!(
        "{} Parsed {} PDF(s) with {} total line item row(s) in {:?}",
        style("✓").green(),
        result.documents_attempted,
        result.rows.len(),
        start.elapsed()
    );

    Ok(())
}

fn report_warnings(warnings: &[quotext_core::DocumentWarning]) {
    if warnings.is_empty() {
        return;
    }
    println!("{}", style("Warnings:").yellow());
    for warning in warnings {
        println!("  - {}", warning);
    }
}

/// Per-document CSV summary: filename, status, row count, quote number,
/// error cause.
fn write_summary(
    path: &PathBuf,
    processor: &BatchProcessor,
    documents: &[RawDocument],
) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["filename", "status", "rows", "quote_number", "error"])?;

    for document in documents {
        match processor.process_document(document) {
            Ok(rows) => {
                let quote_number = rows
                    .first()
                    .and_then(|r| r.quote_number.clone())
                    .unwrap_or_default();
                wtr.write_record([
                    document.name.as_str(),
                    "success",
                    &rows.len().to_string(),
                    &quote_number,
                    "",
                ])?;
            }
            Err(e) => {
                wtr.write_record([document.name.as_str(), "error", "0", "", &e.to_string()])?;
            }
        }
        debug!("Summarized {}", document.name);
    }

    wtr.flush()?;
    Ok(())
}
