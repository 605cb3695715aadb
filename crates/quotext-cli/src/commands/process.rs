//! Process command - extract rows from a single quote PDF.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use quotext_core::{BatchProcessor, OutputRow, RawDocument};

use super::{load_config, DefaultsArgs};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input quote PDF
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    #[command(flatten)]
    defaults: DefaultsArgs,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;
    let defaults = args.defaults.merge_into(&config);

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let name = args
        .input
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("quote.pdf")
        .to_string();
    let bytes = fs::read(&args.input)?;
    let document = RawDocument::new(name, bytes);

    let processor = BatchProcessor::new(defaults);
    let rows = processor.process_document(&document)?;

    if rows.is_empty() {
        anyhow::bail!("No line items were found in {}", args.input.display());
    }

    let output = format_rows(&rows, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn format_rows(rows: &[OutputRow], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
        OutputFormat::Csv => format_csv(rows),
        OutputFormat::Text => Ok(format_text(rows)),
    }
}

fn format_csv(rows: &[OutputRow]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(OutputRow::COLUMNS)?;
    for row in rows {
        wtr.write_record(row.to_record())?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(rows: &[OutputRow]) -> String {
    let mut output = String::new();

    if let Some(first) = rows.first() {
        output.push_str(&format!(
            "Quote: {}\n",
            first.quote_number.as_deref().unwrap_or("(unknown)")
        ));
        if let Some(date) = &first.quote_date {
            output.push_str(&format!("Date: {}\n", date));
        }
        if let Some(company) = &first.company {
            output.push_str(&format!("Company: {}\n", company));
        }
        if let Some(manager) = &first.referral_manager {
            output.push_str(&format!("Referral manager: {}\n", manager));
        }
        output.push('\n');
    }

    output.push_str("Items:\n");
    for row in rows {
        let price = row
            .unit_price
            .map(|v| format!("{:.2}", v))
            .unwrap_or_else(|| "-".to_string());
        let total = row
            .total_sales
            .map(|v| format!("{:.2}", v))
            .unwrap_or_else(|| "-".to_string());
        output.push_str(&format!(
            "  {} | {} | unit {} | total {}\n",
            row.item_id, row.item_desc, price, total
        ));
    }

    output
}
