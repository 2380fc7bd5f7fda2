// file: src/pipeline/driver.rs
// description: locates the input pdf, extracts its text and writes the sibling text file
// reference: sequential extraction workflow

use crate::error::Result;
use crate::exporter::TextExporter;
use crate::extractor::PdfTextExtractor;
use crate::models::ExtractionReport;
use crate::utils::{OperationTimer, Validator};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

pub const INPUT_FILE: &str = "Assessment.pdf";
pub const OUTPUT_FILE: &str = "Assessment.extracted.txt";

const SLOW_EXTRACTION: Duration = Duration::from_secs(30);

pub struct ExtractionDriver {
    workdir: PathBuf,
    extractor: PdfTextExtractor,
}

impl ExtractionDriver {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            extractor: PdfTextExtractor::new(),
        }
    }

    /// Driver bound to the process working directory.
    pub fn from_current_dir() -> Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    pub fn input_path(&self) -> PathBuf {
        self.workdir.join(INPUT_FILE)
    }

    pub fn output_path(&self) -> PathBuf {
        self.workdir.join(OUTPUT_FILE)
    }

    /// The output file is only touched once extraction has succeeded.
    pub fn run(&self) -> Result<ExtractionReport> {
        let input = self.input_path();
        Validator::require_input(&input)?;
        info!("Reading {}", input.display());

        let timer = OperationTimer::new("pdf text extraction");
        let text = self.extractor.extract(&input)?;
        timer.warn_if_slow(SLOW_EXTRACTION);
        timer.finish();

        let timer = OperationTimer::new("text export");
        let resolved = TextExporter::new(self.output_path()).write(&text)?;
        let report = ExtractionReport::new(resolved, &text);
        timer.finish_with_count(report.chars, "chars");

        Ok(report)
    }
}
