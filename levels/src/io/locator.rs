//! Discovery of `level<N>_<variant>.in` files in the data directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::core::input_file::{FileOrdering, InputFile, parse_file_name, sort_input_files};
use crate::error::{HarnessError, Result};

/// List every input file for `level` in `data_dir`, sorted by `ordering`.
///
/// Returned paths are absolute. A missing data directory is an error; a
/// directory with no matching files yields an empty list.
pub fn list_input_files(
    data_dir: &Path,
    level: u32,
    ordering: FileOrdering,
) -> Result<Vec<InputFile>> {
    if !data_dir.is_dir() {
        return Err(HarnessError::DirectoryNotFound {
            path: data_dir.to_path_buf(),
        });
    }
    let data_dir = std::path::absolute(data_dir)
        .map_err(|err| HarnessError::from_read(data_dir, err))?;
    let entries = fs::read_dir(&data_dir).map_err(|err| HarnessError::from_read(&data_dir, err))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| HarnessError::from_read(&data_dir, err))?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            trace!(name = ?file_name, "skipping non-utf8 entry");
            continue;
        };
        let Some(variant) = parse_file_name(name, level) else {
            continue;
        };
        debug!(level, file = name, "discovered input file");
        files.push(InputFile {
            level,
            variant,
            file_name: name.to_string(),
            path: data_dir.join(name),
        });
    }

    sort_input_files(&mut files, ordering);
    Ok(files)
}

/// Paths-only form of [`list_input_files`] with lexicographic ordering.
pub fn list_input_paths(data_dir: &Path, level: u32) -> Result<Vec<PathBuf>> {
    let files = list_input_files(data_dir, level, FileOrdering::Lexicographic)?;
    Ok(files.into_iter().map(|file| file.path).collect())
}
