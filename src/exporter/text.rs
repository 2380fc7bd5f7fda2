// file: src/exporter/text.rs
// description: plain text export of extracted content

use crate::error::{ExtractError, Result};
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct TextExporter {
    destination: PathBuf,
}

impl TextExporter {
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
        }
    }

    /// Writes `text` as UTF-8, replacing whatever the file held before, and
    /// returns the absolute path of the written file.
    pub fn write(&self, text: &str) -> Result<PathBuf> {
        fs::write(&self.destination, text.as_bytes()).map_err(|source| {
            ExtractError::FileOperation {
                path: self.destination.clone(),
                source,
            }
        })?;

        let resolved =
            fs::canonicalize(&self.destination).map_err(|source| ExtractError::FileOperation {
                path: self.destination.clone(),
                source,
            })?;

        info!("Wrote {} bytes to {}", text.len(), resolved.display());
        Ok(resolved)
    }
}
