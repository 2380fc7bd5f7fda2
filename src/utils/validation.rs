// file: src/utils/validation.rs
// description: input presence check for the extraction driver
// reference: input validation patterns

use crate::error::{ExtractError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    /// Fails with `InputMissing` when nothing exists at `path`. Whether the
    /// entry is a readable PDF is left to the extractor.
    pub fn require_input(path: &Path) -> Result<()> {
        if path.exists() {
            return Ok(());
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Err(ExtractError::InputMissing {
            name,
            path: path.to_path_buf(),
        })
    }
}
