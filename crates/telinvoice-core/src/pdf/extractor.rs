//! PDF text extraction using lopdf and pdf-extract.

use std::fs;
use std::panic;
use std::path::Path;

use lopdf::Document;
use tracing::{debug, warn};

use super::TextSource;
use crate::error::{PdfError, Result};
use crate::models::config::PdfConfig;

/// Text source for PDF files on disk.
#[derive(Debug, Clone, Default)]
pub struct PdfTextSource {
    config: PdfConfig,
}

impl PdfTextSource {
    /// Create a new PDF text source with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a PDF text source with the given configuration.
    pub fn with_config(config: PdfConfig) -> Self {
        Self { config }
    }

    /// Extract all text from an in-memory PDF.
    pub fn extract_text_from_mem(&self, data: &[u8]) -> std::result::Result<String, PdfError> {
        let (doc, raw_data) = self.load(data)?;

        let page_count = doc.get_pages().len();
        debug!("Loaded PDF with {} pages", page_count);
        if page_count == 0 {
            return Ok(String::new());
        }

        // pdf-extract panics on some malformed font tables
        match panic::catch_unwind(|| pdf_extract::extract_text_from_mem(&raw_data)) {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => {
                warn!("Whole-document text extraction failed ({}), extracting page by page", e);
                Ok(self.extract_pages(&doc))
            }
            Err(_) => {
                warn!("Whole-document text extraction panicked, extracting page by page");
                Ok(self.extract_pages(&doc))
            }
        }
    }

    fn load(&self, data: &[u8]) -> std::result::Result<(Document, Vec<u8>), PdfError> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        if !self.unlock(&mut doc)? {
            return Ok((doc, data.to_vec()));
        }

        // pdf-extract needs the decrypted bytes
        let mut decrypted = Vec::new();
        doc.save_to(&mut decrypted)
            .map_err(|e| PdfError::Parse(format!("failed to save decrypted PDF: {}", e)))?;
        Ok((doc, decrypted))
    }

    /// Decrypt with the empty password when allowed. Returns whether the
    /// document was decrypted.
    fn unlock(&self, doc: &mut Document) -> std::result::Result<bool, PdfError> {
        if !doc.is_encrypted() {
            return Ok(false);
        }

        if !self.config.decrypt_empty_password || doc.decrypt("").is_err() {
            return Err(PdfError::Encrypted);
        }
        debug!("Decrypted PDF with empty password");
        Ok(true)
    }

    fn extract_pages(&self, doc: &Document) -> String {
        let mut parts = Vec::new();

        for page_num in doc.get_pages().keys() {
            match doc.extract_text(&[*page_num]) {
                Ok(text) => parts.push(text),
                Err(e) => warn!("Failed to extract text from page {}: {}", page_num, e),
            }
        }

        parts.join(&self.config.page_separator)
    }
}

impl TextSource for PdfTextSource {
    fn extract_text(&self, path: &Path) -> Result<String> {
        let data = fs::read(path).map_err(|e| PdfError::Open {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let text = self.extract_text_from_mem(&data)?;
        debug!("Extracted {} characters from {}", text.len(), path.display());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TelinvoiceError;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    /// One page per entry, each page showing its lines in Helvetica.
    fn build_document(pages: &[&[&str]]) -> Document {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for lines in pages {
            let mut operations = vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![50.into(), 750.into()]),
            ];
            for line in lines.iter() {
                operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
                operations.push(Operation::new("Td", vec![0.into(), (-16).into()]));
            }
            operations.push(Operation::new("ET", vec![]));

            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc
    }

    fn build_pdf(lines: &[&str]) -> Vec<u8> {
        let mut doc = if lines.is_empty() {
            build_document(&[])
        } else {
            build_document(&[lines])
        };
        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let source = PdfTextSource::new();
        let err = source.extract_text(Path::new("/nonexistent/invoice.pdf")).unwrap_err();
        assert!(matches!(err, TelinvoiceError::Pdf(PdfError::Open { .. })));
    }

    #[test]
    fn test_non_pdf_bytes_are_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        fs::write(&path, b"this is not a pdf").unwrap();

        let err = PdfTextSource::new().extract_text(&path).unwrap_err();
        assert!(matches!(err, TelinvoiceError::Pdf(PdfError::Parse(_))));
    }

    #[test]
    fn test_document_without_pages_is_empty_text() {
        let data = build_pdf(&[]);
        let text = PdfTextSource::new().extract_text_from_mem(&data).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_text_page_is_readable() {
        let data = build_pdf(&["Tong cong tien thanh toan: 51.999"]);
        let text = PdfTextSource::new().extract_text_from_mem(&data).unwrap();
        assert!(text.contains("51.999"), "{:?}", text);
    }

    #[test]
    fn test_page_by_page_joins_with_separator() {
        let doc = build_document(&[&["Page one"], &["Page two"]]);
        let source = PdfTextSource::with_config(PdfConfig {
            page_separator: "\n---\n".to_string(),
            ..PdfConfig::default()
        });

        let text = source.extract_pages(&doc);
        let parts: Vec<&str> = text.split("\n---\n").collect();

        assert_eq!(parts.len(), 2, "{:?}", text);
        assert!(parts[0].contains("Page one"), "{:?}", text);
        assert!(parts[1].contains("Page two"), "{:?}", text);
    }

    #[test]
    fn test_encrypted_document_without_empty_password_attempt() {
        let mut doc = build_document(&[&["Page one"]]);
        let encrypt_id = doc.add_object(dictionary! {
            "Filter" => "Standard",
            "V" => 1,
            "R" => 2,
            "Length" => 40,
        });
        doc.trailer.set("Encrypt", encrypt_id);

        let source = PdfTextSource::with_config(PdfConfig {
            decrypt_empty_password: false,
            ..PdfConfig::default()
        });

        assert!(matches!(source.unlock(&mut doc), Err(PdfError::Encrypted)));
    }

    #[test]
    fn test_plain_document_needs_no_unlock() {
        let mut doc = build_document(&[&["Page one"]]);
        assert!(!PdfTextSource::new().unlock(&mut doc).unwrap());
    }
}
