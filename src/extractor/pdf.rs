// file: src/extractor/pdf.rs
// description: pdf text extraction backed by pdf-extract
// reference: https://docs.rs/pdf-extract

use crate::error::{ExtractError, Result};
use std::path::Path;
use tracing::debug;

/// Pulls every text run out of a PDF as one string. Layout, font tables and
/// character decoding are handled by `pdf_extract`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, path: &Path) -> Result<String> {
        debug!("Extracting text from {}", path.display());

        let text = pdf_extract::extract_text(path).map_err(|e| ExtractError::Extraction {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        debug!("Extracted {} bytes of text", text.len());
        Ok(text)
    }
}
