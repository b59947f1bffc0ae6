//! PDF text extraction.

mod extractor;

pub use extractor::PdfTextSource;

use std::path::Path;

use crate::error::Result;

/// Source of raw document text.
///
/// Implementations open the document, read its text layer and release it
/// within the call. A document without a text layer yields an empty
/// string; only a document that cannot be opened is an error.
pub trait TextSource {
    /// Extract all text from the document at `path`.
    fn extract_text(&self, path: &Path) -> Result<String>;
}
