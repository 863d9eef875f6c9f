//! Optical character recognition, feature-gated behind `ocr`

use crate::error::ExtractError;
use std::path::Path;

/// Run OCR over the file at `path`
#[cfg(feature = "ocr")]
pub(crate) fn recognize_file(path: &Path, language: &str) -> Result<String, ExtractError> {
    let path_str = path
        .to_str()
        .ok_or_else(|| ExtractError::Ocr("Invalid path".to_string()))?;

    let text = tesseract::Tesseract::new(None, Some(language))
        .map_err(|e| ExtractError::Ocr(format!("Tesseract init: {}", e)))?
        .set_image(path_str)
        .map_err(|e| ExtractError::Ocr(format!("Tesseract image: {}", e)))?
        .recognize()
        .map_err(|e| ExtractError::Ocr(format!("Tesseract recognize: {}", e)))?
        .get_text()
        .map_err(|e| ExtractError::Ocr(format!("OCR text: {}", e)))?;

    Ok(text)
}

#[cfg(not(feature = "ocr"))]
pub(crate) fn recognize_file(_path: &Path, _language: &str) -> Result<String, ExtractError> {
    Err(ExtractError::OcrUnavailable)
}
