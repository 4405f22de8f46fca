//! Test-only helpers for building a scratch harness layout.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::io::config::LevelDirs;
use crate::io::paths::HarnessPaths;

/// A temporary root with empty `data/` and `output/` directories.
pub struct TestLayout {
    _temp: TempDir,
    paths: HarnessPaths,
}

impl TestLayout {
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir().context("create tempdir")?;
        let paths = HarnessPaths::new(temp.path());
        fs::create_dir(&paths.data_dir).context("create data dir")?;
        fs::create_dir(&paths.output_dir).context("create output dir")?;
        Ok(Self { _temp: temp, paths })
    }

    pub fn root(&self) -> &Path {
        &self.paths.root
    }

    pub fn data_dir(&self) -> &Path {
        &self.paths.data_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.paths.output_dir
    }

    pub fn paths(&self) -> &HarnessPaths {
        &self.paths
    }

    /// Standard directories with default ordering.
    pub fn dirs(&self) -> LevelDirs {
        LevelDirs::under(self.root())
    }

    /// Write raw `contents` to `data/<name>`.
    pub fn write_input(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.paths.data_dir.join(name);
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }

    /// Read `output/<name>` as raw text.
    pub fn read_output(&self, name: &str) -> Result<String> {
        let path = self.paths.output_dir.join(name);
        fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))
    }
}
