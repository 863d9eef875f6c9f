//! Core extraction implementation: extension dispatch and per-format readers

use crate::error::ExtractError;
use crate::ocr;
use crate::types::{ExtractionMethod, ExtractionOutcome};
use std::path::Path;
use tracing::{debug, info, warn};

/// Minimum stripped character count for embedded PDF text to be trusted;
/// below this the document is treated as scanned and OCR runs instead
const PDF_TEXT_MIN_CHARS: usize = 50;

/// Default OCR language
const DEFAULT_OCR_LANGUAGE: &str = "eng";

/// Converts a source file into plain text plus extraction metadata
///
/// Supported formats: PDF (embedded text with OCR fallback for scanned
/// documents), JPG/JPEG/PNG (OCR), CSV (flat table rendering).
pub struct DocumentExtractor {
    ocr_language: String,
}

impl DocumentExtractor {
    /// Create an extractor with the default OCR language
    pub fn new() -> Self {
        Self {
            ocr_language: DEFAULT_OCR_LANGUAGE.to_string(),
        }
    }

    /// Override the OCR language (a Tesseract language code such as "eng")
    pub fn with_ocr_language(mut self, language: impl Into<String>) -> Self {
        self.ocr_language = language.into();
        self
    }

    /// Extract text from the file at `path`
    ///
    /// Never fails: every fault is caught and logged, producing an outcome
    /// with empty text. Callers must check `char_count` / text length, not
    /// errors. An unsupported extension yields method `Unknown` with zero
    /// pages.
    pub fn extract(&self, path: &Path) -> ExtractionOutcome {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        let outcome = match extension.as_str() {
            "pdf" => self.extract_pdf(path),
            "jpg" | "jpeg" | "png" => self.extract_image(path),
            "csv" => self.extract_csv(path),
            other => {
                warn!("unsupported file extension '{}': {}", other, path.display());
                ExtractionOutcome::empty(ExtractionMethod::Unknown)
            }
        };

        info!(
            "extracted {} chars from {} via {}",
            outcome.char_count,
            path.display(),
            outcome.method
        );

        outcome
    }

    /// Embedded PDF text, falling back to OCR when the text is too sparse
    /// to be anything but a scanned document
    fn extract_pdf(&self, path: &Path) -> ExtractionOutcome {
        let text = match embedded_pdf_text(path) {
            Ok(text) => text,
            Err(e) => {
                warn!("PDF text extraction failed for {}: {}", path.display(), e);
                String::new()
            }
        };

        if text.trim().chars().count() >= PDF_TEXT_MIN_CHARS {
            let pages = pdf_page_count(&text);
            return ExtractionOutcome::new(text, ExtractionMethod::PdfText, pages);
        }

        debug!(
            "embedded text too sparse in {}, falling back to OCR",
            path.display()
        );

        match ocr::recognize_file(path, &self.ocr_language) {
            Ok(ocr_text) => {
                let pages = pdf_page_count(&ocr_text);
                ExtractionOutcome::new(ocr_text, ExtractionMethod::PdfOcr, pages)
            }
            Err(e) => {
                warn!("OCR fallback failed for {}: {}", path.display(), e);
                ExtractionOutcome::empty(ExtractionMethod::PdfText)
            }
        }
    }

    /// Direct OCR over an image file
    fn extract_image(&self, path: &Path) -> ExtractionOutcome {
        match ocr::recognize_file(path, &self.ocr_language) {
            Ok(text) => ExtractionOutcome::new(text, ExtractionMethod::ImageOcr, 1),
            Err(e) => {
                warn!("image OCR failed for {}: {}", path.display(), e);
                let mut outcome = ExtractionOutcome::empty(ExtractionMethod::ImageOcr);
                outcome.page_count = 1;
                outcome
            }
        }
    }

    /// CSV rows rendered as a flat textual table
    fn extract_csv(&self, path: &Path) -> ExtractionOutcome {
        match render_csv(path) {
            Ok(text) => ExtractionOutcome::new(text, ExtractionMethod::Csv, 1),
            Err(e) => {
                warn!("CSV extraction failed for {}: {}", path.display(), e);
                let mut outcome = ExtractionOutcome::empty(ExtractionMethod::Csv);
                outcome.page_count = 1;
                outcome
            }
        }
    }
}

impl Default for DocumentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn embedded_pdf_text(path: &Path) -> Result<String, ExtractError> {
    pdf_extract::extract_text(path).map_err(|e| ExtractError::Pdf(e.to_string()))
}

/// Approximate page count from form-feed page separators
fn pdf_page_count(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    text.matches('\u{000C}').count() + 1
}

fn render_csv(path: &Path) -> Result<String, ExtractError> {
    let mut reader =
        csv::Reader::from_path(path).map_err(|e| ExtractError::Csv(e.to_string()))?;

    let mut lines = Vec::new();

    let headers = reader
        .headers()
        .map_err(|e| ExtractError::Csv(e.to_string()))?;
    lines.push(headers.iter().collect::<Vec<_>>().join("  "));

    for record in reader.records() {
        let record = record.map_err(|e| ExtractError::Csv(e.to_string()))?;
        lines.push(record.iter().collect::<Vec<_>>().join("  "));
    }

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_csv_extraction() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(
            &dir,
            "statement.csv",
            "date,merchant,amount\n2026-01-05,Netflix,649\n2026-02-04,Netflix,649\n",
        );

        let outcome = DocumentExtractor::new().extract(&path);

        assert_eq!(outcome.method, ExtractionMethod::Csv);
        assert_eq!(outcome.page_count, 1);
        assert!(outcome.text.contains("Netflix"));
        assert!(outcome.text.contains("649"));
        assert_eq!(outcome.char_count, outcome.text.chars().count());
    }

    #[test]
    fn test_csv_extension_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "statement.CSV", "a,b\n1,2\n");

        let outcome = DocumentExtractor::new().extract(&path);
        assert_eq!(outcome.method, ExtractionMethod::Csv);
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "statement.docx", "not supported");

        let outcome = DocumentExtractor::new().extract(&path);

        assert_eq!(outcome.method, ExtractionMethod::Unknown);
        assert_eq!(outcome.page_count, 0);
        assert!(outcome.text.is_empty());
        assert_eq!(outcome.char_count, 0);
    }

    #[test]
    fn test_missing_file_yields_empty_text() {
        let outcome = DocumentExtractor::new().extract(Path::new("/nonexistent/file.csv"));

        assert!(outcome.text.is_empty());
        assert_eq!(outcome.char_count, 0);
    }

    #[test]
    fn test_invalid_pdf_yields_empty_text_not_panic() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "broken.pdf", "this is not a pdf");

        let outcome = DocumentExtractor::new().extract(&path);

        assert!(outcome.text.is_empty());
        assert_eq!(outcome.char_count, 0);
    }

    #[test]
    fn test_broken_pdf_reports_pdf_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "broken.pdf", "this is not a pdf");

        let err = embedded_pdf_text(&path).unwrap_err();
        assert!(matches!(err, ExtractError::Pdf(_)));
    }

    #[test]
    fn test_page_count_heuristic() {
        assert_eq!(pdf_page_count(""), 0);
        assert_eq!(pdf_page_count("one page"), 1);
        assert_eq!(pdf_page_count("page one\u{000C}page two"), 2);
    }
}
