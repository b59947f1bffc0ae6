//! Document and batch processing.
//!
//! Documents are handled one at a time. A document that cannot be read is
//! recorded as a failure for that path and the batch moves on, unless the
//! caller asked to stop at the first failure.

use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::error::Result;
use crate::invoice::{ExtractionResult, Provider};
use crate::models::invoice::Invoice;
use crate::pdf::TextSource;

/// Read one document and parse it with the provider's layout.
pub fn parse_document(
    provider: Provider,
    source: &dyn TextSource,
    path: &Path,
) -> Result<ExtractionResult> {
    let text = source.extract_text(path)?;
    Ok(provider.extract(&text))
}

/// Outcome for one document of a batch.
#[derive(Debug)]
pub struct DocumentOutcome {
    pub path: PathBuf,
    pub result: Result<ExtractionResult>,
}

/// Outcomes of a batch, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<DocumentOutcome>,
    /// Set when the batch stopped at a failure before the last path.
    pub stopped_early: bool,
}

impl BatchReport {
    /// Successfully parsed invoices, in input order.
    pub fn invoices(&self) -> Vec<&Invoice> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok())
            .map(|r| &r.invoice)
            .collect()
    }

    /// Paths that could not be parsed, with the error message.
    pub fn failures(&self) -> Vec<(&Path, String)> {
        self.outcomes
            .iter()
            .filter_map(|o| match &o.result {
                Err(e) => Some((o.path.as_path(), e.to_string())),
                Ok(_) => None,
            })
            .collect()
    }

    /// Number of parsed documents.
    pub fn parsed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    /// "N of M invoices parsed".
    pub fn summary(&self) -> String {
        format!("{} of {} invoices parsed", self.parsed_count(), self.outcomes.len())
    }
}

/// Parse every document in order with the same provider.
pub fn parse_batch<P: AsRef<Path>>(
    provider: Provider,
    source: &dyn TextSource,
    paths: &[P],
) -> BatchReport {
    parse_batch_with(provider, source, paths, false, |_| {})
}

/// Like [`parse_batch`], calling `on_document` after each document.
///
/// With `stop_on_error` the batch ends at the first unreadable document;
/// that failure is the last outcome and `stopped_early` is set when paths
/// remain.
pub fn parse_batch_with<P, F>(
    provider: Provider,
    source: &dyn TextSource,
    paths: &[P],
    stop_on_error: bool,
    mut on_document: F,
) -> BatchReport
where
    P: AsRef<Path>,
    F: FnMut(&DocumentOutcome),
{
    let mut report = BatchReport::default();

    for (idx, path) in paths.iter().enumerate() {
        let path = path.as_ref();
        let result = parse_document(provider, source, path);

        let failed = match &result {
            Err(e) if stop_on_error => {
                error!("Failed to process {}: {}", path.display(), e);
                true
            }
            Err(e) => {
                warn!("Failed to process {}: {}", path.display(), e);
                false
            }
            Ok(_) => false,
        };

        let outcome = DocumentOutcome {
            path: path.to_path_buf(),
            result,
        };
        on_document(&outcome);
        report.outcomes.push(outcome);

        if failed {
            report.stopped_early = idx + 1 < paths.len();
            break;
        }
    }

    info!("{}", report.summary());
    report
}
