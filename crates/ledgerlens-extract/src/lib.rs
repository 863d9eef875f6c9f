//! LedgerLens Text Extraction
//!
//! Converts a source file (PDF, image, CSV) into plain text plus extraction
//! metadata. Dispatch is by file extension, case-insensitive.
//!
//! # Architecture
//!
//! ```text
//! File → DocumentExtractor → ExtractionOutcome { text, method, pages }
//! ```
//!
//! Extraction never fails: every fault is caught and logged, and the caller
//! judges the outcome by text length, not by error. Optical character
//! recognition is behind the `ocr` cargo feature (optional `tesseract`
//! dependency); with the feature off, OCR paths degrade to empty text.

#![warn(missing_docs)]

mod error;
mod extractor;
mod ocr;
mod types;

pub use error::ExtractError;
pub use extractor::DocumentExtractor;
pub use types::{ExtractionMethod, ExtractionOutcome};
