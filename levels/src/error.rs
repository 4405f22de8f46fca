//! Error kinds surfaced by the harness.
//!
//! Library functions return [`HarnessError`] so callers (and tests) can match
//! on the failure kind. The CLI wraps these in `anyhow` for context-rich
//! reporting.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for harness results.
pub type Result<T, E = HarnessError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum HarnessError {
    /// The data directory does not exist (or is not a directory).
    #[error("data directory not found: {}", .path.display())]
    DirectoryNotFound { path: PathBuf },

    /// An input file does not exist.
    #[error("input file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("read {}", .path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("write {}", .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input base name has no `.in` suffix to replace.
    #[error("cannot derive output name from '{name}': expected a '.in' suffix")]
    MalformedOutputName { name: String },

    /// A token could not be converted to a number (hardened parsing only).
    #[error("invalid number '{token}' in line '{line}'")]
    ParseError { token: String, line: String },

    /// The level transform failed while processing `path`.
    #[error("transform failed for {}", .path.display())]
    Transform {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl HarnessError {
    /// Map an I/O failure while reading `path` to `FileNotFound` or `ReadError`.
    pub(crate) fn from_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            HarnessError::FileNotFound { path }
        } else {
            HarnessError::ReadError { path, source }
        }
    }
}
