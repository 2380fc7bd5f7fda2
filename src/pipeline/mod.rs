// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

mod driver;

pub use driver::{ExtractionDriver, INPUT_FILE, OUTPUT_FILE};
