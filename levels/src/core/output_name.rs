//! Output file naming: `<stem>.in` becomes `<stem>.out`.

use std::path::{Path, PathBuf};

use crate::error::{HarnessError, Result};

const INPUT_SUFFIX: &str = ".in";
const OUTPUT_SUFFIX: &str = ".out";

/// Derive the output base name from an input base name.
///
/// Only a trailing `.in` is replaced. Names without it (including names that
/// merely contain `.in` elsewhere, such as `notes.input`) are rejected rather
/// than mapped to a surprising name.
pub fn output_name(input_name: &str) -> Result<String> {
    match input_name.strip_suffix(INPUT_SUFFIX) {
        Some(stem) if !stem.is_empty() => Ok(format!("{stem}{OUTPUT_SUFFIX}")),
        _ => Err(HarnessError::MalformedOutputName {
            name: input_name.to_string(),
        }),
    }
}

/// Join the derived output name for `input_path` onto `output_dir`.
pub fn output_path(input_path: &Path, output_dir: &Path) -> Result<PathBuf> {
    let name = input_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| HarnessError::MalformedOutputName {
            name: input_path.display().to_string(),
        })?;
    Ok(output_dir.join(output_name(name)?))
}
