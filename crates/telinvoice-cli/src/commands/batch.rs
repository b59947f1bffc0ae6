//! Batch processing command - parse many invoices into one ledger CSV.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::NaiveDate;
use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use telinvoice_core::{
    invoices_to_ledger_rows, parse_batch_with, BatchReport, LedgerRow, PdfTextSource,
    LEDGER_COLUMNS,
};

use super::{load_config, resolve_provider};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern matching the invoice PDFs
    #[arg(required = true)]
    input: String,

    /// Invoice provider (mobifone, viettel, vnpt)
    #[arg(short, long)]
    provider: Option<String>,

    /// Ledger CSV output path
    #[arg(short, long, default_value = "ledger.csv")]
    output: PathBuf,

    /// Also write the parsed invoices as JSON
    #[arg(long)]
    invoices_json: Option<PathBuf>,

    /// Billing period used in descriptions, e.g. T12.24
    #[arg(long)]
    period: Option<String>,

    /// Posting date for invoices without a date (YYYY-MM-DD)
    #[arg(long)]
    document_date: Option<String>,

    /// Stop at the first unreadable document
    #[arg(long)]
    fail_fast: bool,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    let provider = resolve_provider(args.provider.as_deref(), &config)?;

    if let Some(period) = &args.period {
        config.ledger.period = period.clone();
    }

    if let Some(date) = &args.document_date {
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| anyhow::anyhow!("Invalid document date (expected YYYY-MM-DD): {}", date))?;
    }

    let continue_on_error = config.batch.continue_on_error && !args.fail_fast;

    let mut files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            ext.eq_ignore_ascii_case("pdf")
        })
        .collect();
    files.sort();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process as {}",
        style("ℹ").blue(),
        files.len(),
        provider
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let source = PdfTextSource::with_config(config.pdf.clone());
    let report = parse_batch_with(provider, &source, &files, !continue_on_error, |_| pb.inc(1));

    if !continue_on_error {
        if let Some((path, message)) = report.failures().first() {
            pb.abandon();
            anyhow::bail!("Processing failed for {}: {}", path.display(), message);
        }
    }

    pb.finish_with_message("Complete");

    let invoices = report.invoices();
    let rows = invoices_to_ledger_rows(
        invoices.iter().copied(),
        &config.ledger,
        provider,
        args.document_date.as_deref(),
    );

    write_ledger(&args.output, &rows)?;
    println!(
        "{} Ledger with {} rows written to {}",
        style("✓").green(),
        rows.len(),
        args.output.display()
    );

    if let Some(json_path) = &args.invoices_json {
        fs::write(json_path, serde_json::to_string_pretty(&invoices)?)?;
        println!(
            "{} Invoices written to {}",
            style("✓").green(),
            json_path.display()
        );
    }

    print_summary(&report);
    debug!("Batch finished in {:?}", start.elapsed());

    Ok(())
}

fn write_ledger(path: &Path, rows: &[LedgerRow]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(LEDGER_COLUMNS)?;
    for row in rows {
        wtr.write_record(row.record())?;
    }

    wtr.flush()?;
    Ok(())
}

fn print_summary(report: &BatchReport) {
    println!();
    println!("{} {}", style("✓").green(), report.summary());

    let flagged: Vec<_> = report
        .outcomes
        .iter()
        .filter_map(|o| o.result.as_ref().ok().map(|r| (&o.path, &r.warnings)))
        .filter(|(_, warnings)| !warnings.is_empty())
        .collect();

    if !flagged.is_empty() {
        println!();
        println!("{}", style("Needs review:").yellow());
        for (path, warnings) in flagged {
            println!("  - {}: {}", path.display(), warnings.join(", "));
        }
    }

    let failures = report.failures();
    if !failures.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for (path, message) in failures {
            println!("  - {}: {}", path.display(), message);
        }
    }
}
