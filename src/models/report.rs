// file: src/models/report.rs
// description: summary of a completed extraction run
// reference: internal data structures

use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionReport {
    pub output_path: PathBuf,
    pub chars: usize,
}

impl ExtractionReport {
    /// `chars` counts Unicode scalar values, not bytes.
    pub fn new(output_path: PathBuf, text: &str) -> Self {
        Self {
            output_path,
            chars: text.chars().count(),
        }
    }
}

impl fmt::Display for ExtractionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Extracted to: {} (chars={})",
            self.output_path.display(),
            self.chars
        )
    }
}
