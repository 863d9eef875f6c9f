//! Extraction outcome types

use std::fmt;

/// Which extraction path actually produced the text
///
/// When the OCR fallback fires inside PDF extraction the tag reports
/// `PdfOcr`, not the path that was attempted first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMethod {
    /// Embedded PDF text
    PdfText,
    /// OCR over a scanned PDF
    PdfOcr,
    /// OCR over an image file
    ImageOcr,
    /// CSV rendered as a flat table
    Csv,
    /// Unsupported extension; callers must treat as failure
    Unknown,
}

impl ExtractionMethod {
    /// String tag for logs and debug endpoints
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionMethod::PdfText => "pdf_text",
            ExtractionMethod::PdfOcr => "pdf_ocr",
            ExtractionMethod::ImageOcr => "image_ocr",
            ExtractionMethod::Csv => "csv",
            ExtractionMethod::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ExtractionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of extracting text from one source file
///
/// Ephemeral value: produced by the extractor, consumed immediately by the
/// parser, never persisted.
#[derive(Debug, Clone)]
pub struct ExtractionOutcome {
    /// The extracted plain text (possibly empty on failure)
    pub text: String,

    /// Which path produced the text
    pub method: ExtractionMethod,

    /// Page count of the source (1 for images/CSV, 0 when unsupported)
    pub page_count: usize,

    /// Character count of `text`
    pub char_count: usize,
}

impl ExtractionOutcome {
    pub(crate) fn new(text: String, method: ExtractionMethod, page_count: usize) -> Self {
        let char_count = text.chars().count();
        Self {
            text,
            method,
            page_count,
            char_count,
        }
    }

    pub(crate) fn empty(method: ExtractionMethod) -> Self {
        Self {
            text: String::new(),
            method,
            page_count: 0,
            char_count: 0,
        }
    }
}
