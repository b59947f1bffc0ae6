//! Core library for Vietnamese telecom invoice processing.
//!
//! This crate provides:
//! - PDF text extraction (lopdf + pdf-extract)
//! - Field extraction for Mobifone, Viettel and VNPT invoice layouts
//! - A provider registry keyed by name
//! - Conversion of parsed invoices into SAP journal import rows

pub mod error;
pub mod invoice;
pub mod ledger;
pub mod models;
pub mod pdf;
pub mod pipeline;

pub use error::{PdfError, Result, TelinvoiceError};
pub use invoice::{parser_for, ExtractionResult, InvoiceParser, Provider};
pub use ledger::{invoices_to_ledger_rows, LedgerRow, LEDGER_COLUMNS};
pub use models::config::{AppConfig, BatchConfig, LedgerConfig, PdfConfig};
pub use models::invoice::{ChargeLine, Invoice};
pub use pdf::{PdfTextSource, TextSource};
pub use pipeline::{parse_batch, parse_batch_with, parse_document, BatchReport, DocumentOutcome};
