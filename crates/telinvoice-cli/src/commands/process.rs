//! Process command - extract data from a single invoice file.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use telinvoice_core::{parse_document, ExtractionResult, PdfTextSource};

use super::{load_config, resolve_provider};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Invoice provider (mobifone, viettel, vnpt)
    #[arg(short, long)]
    provider: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;
    let provider = resolve_provider(args.provider.as_deref(), &config)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let source = PdfTextSource::with_config(config.pdf.clone());
    let result = parse_document(provider, &source, &args.input)?;

    if !result.warnings.is_empty() {
        eprintln!("{}", style("Review needed:").yellow());
        for warning in &result.warnings {
            eprintln!("  - {}", warning);
        }
    }

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&result)?,
        OutputFormat::Text => format_text(&result),
    };

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

fn format_text(result: &ExtractionResult) -> String {
    let invoice = &result.invoice;
    let mut output = String::new();

    output.push_str(&format!("Provider: {}\n", result.provider));
    output.push_str(&format!("Invoice:  {}\n", invoice.invoice_no));
    output.push_str(&format!("Serial:   {}\n", invoice.serial_no));
    output.push_str(&format!("Date:     {}\n", invoice.invoice_date));
    output.push('\n');

    output.push_str("Lines:\n");
    for line in &invoice.lines {
        output.push_str(&format!(
            "  base {:>12}  VAT {:>2}% {:>10}  total {:>12}\n",
            line.base_amount, line.vat_rate, line.vat_amount, line.total_amount
        ));
    }
    output.push('\n');
    output.push_str(&format!("Total: {}\n", invoice.total_amount()));

    output
}
