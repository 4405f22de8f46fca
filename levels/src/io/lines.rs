//! Reading and writing newline-separated line files.

use std::fs;
use std::path::Path;

use crate::error::{HarnessError, Result};

/// Read `path` as UTF-8 and split it into lines on `\n`.
///
/// A single trailing newline does not produce a final empty line; a file
/// without one keeps its last line as-is. `\r` is left untouched.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path).map_err(|err| HarnessError::from_read(path, err))?;
    Ok(split_lines(&contents))
}

/// Write `lines` joined by `\n` plus exactly one trailing `\n`.
///
/// Creates or truncates `path`. The parent directory must already exist.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    fs::write(path, join_lines(lines)).map_err(|source| HarnessError::WriteError {
        path: path.to_path_buf(),
        source,
    })
}

pub fn split_lines(contents: &str) -> Vec<String> {
    let body = contents.strip_suffix('\n').unwrap_or(contents);
    body.split('\n').map(str::to_string).collect()
}

pub fn join_lines(lines: &[String]) -> String {
    let mut buf = lines.join("\n");
    buf.push('\n');
    buf
}
