//! Error types for text extraction

use thiserror::Error;

/// Errors that can occur inside the extraction helpers
///
/// These never escape [`crate::DocumentExtractor::extract`]; the public
/// contract absorbs them into an empty-text outcome.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// PDF text extraction error
    #[error("PDF error: {0}")]
    Pdf(String),

    /// CSV read error
    #[error("CSV error: {0}")]
    Csv(String),

    /// Optical character recognition error
    #[error("OCR error: {0}")]
    Ocr(String),

    /// OCR requested but the crate was built without the `ocr` feature
    #[error("OCR support not compiled in (enable the `ocr` feature)")]
    OcrUnavailable,
}
