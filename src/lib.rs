// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod models;
pub mod pipeline;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use config::{Config, LoggingConfig};
pub use error::{ExtractError, Result};
pub use exporter::TextExporter;
pub use extractor::PdfTextExtractor;
pub use models::ExtractionReport;
pub use pipeline::{ExtractionDriver, INPUT_FILE, OUTPUT_FILE};
pub use utils::{OperationTimer, Validator};
