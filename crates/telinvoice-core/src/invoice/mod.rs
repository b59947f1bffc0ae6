//! Provider-specific invoice field extraction.

mod mobifone;
mod registry;
pub mod rules;
mod viettel;
mod vnpt;

pub use mobifone::MobifoneParser;
pub use registry::{parser_for, Provider};
pub use viettel::ViettelParser;
pub use vnpt::VnptParser;

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use crate::models::invoice::Invoice;

/// Trait for a provider's invoice layout.
///
/// Parsing is total: fields that cannot be located come back empty, so a
/// garbled document yields a partial invoice instead of an error.
pub trait InvoiceParser {
    /// Parse invoice fields from the raw text of one document.
    fn parse(&self, text: &str) -> Invoice;
}

/// Result of invoice extraction.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResult {
    /// Provider whose layout was applied.
    pub provider: Provider,
    /// Extracted invoice data.
    pub invoice: Invoice,
    /// Fields that need manual review.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

impl Provider {
    /// Parse text and collect review warnings alongside the invoice.
    pub fn extract(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();
        info!("Parsing {} invoice from {} characters of text", self, text.len());

        let mut warnings = Vec::new();
        if text.trim().is_empty() {
            warnings.push("Document has no text layer".to_string());
        }

        let invoice = self.parse(text);
        warnings.extend(invoice.validate());

        debug!(
            "Extracted invoice {:?} with {} lines, {} warnings",
            invoice.invoice_no,
            invoice.lines.len(),
            warnings.len()
        );

        ExtractionResult {
            provider: *self,
            invoice,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}
