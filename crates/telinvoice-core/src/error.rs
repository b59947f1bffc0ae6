//! Error types for the telinvoice-core library.
//!
//! Only two conditions cross the library boundary as errors: an unknown
//! provider name and a document whose text cannot be read. Everything the
//! field extractors fail to find degrades to an empty value instead.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the telinvoice library.
#[derive(Error, Debug)]
pub enum TelinvoiceError {
    /// The registry has no parser for this provider name.
    #[error("provider not supported: {0}")]
    UnsupportedProvider(String),

    /// The document could not be opened or read.
    #[error("unreadable document: {0}")]
    Pdf(#[from] PdfError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to reading PDF documents.
#[derive(Error, Debug)]
pub enum PdfError {
    /// The file itself could not be read.
    #[error("failed to open {path}: {reason}")]
    Open { path: PathBuf, reason: String },

    /// The bytes are not a loadable PDF.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// The PDF is encrypted and cannot be opened with an empty password.
    #[error("PDF is encrypted")]
    Encrypted,
}

/// Result type for the telinvoice library.
pub type Result<T> = std::result::Result<T, TelinvoiceError>;
