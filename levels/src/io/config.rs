//! Harness configuration stored at `<root>/levels.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::input_file::FileOrdering;
use crate::core::numbers::NumberMode;
use crate::error::{HarnessError, Result};
use crate::io::paths::HarnessPaths;

/// Harness configuration (TOML).
///
/// Missing fields default to the standard layout: `data/` and `output/`
/// under the root, lexicographic ordering, strict number parsing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HarnessConfig {
    /// Directory holding `level<N>_<variant>.in` files. Relative to the root.
    pub data_dir: PathBuf,

    /// Directory receiving `.out` files. Relative to the root. Never created
    /// by `run`.
    pub output_dir: PathBuf,

    pub ordering: FileOrdering,

    /// How solvers parse numeric lines.
    pub numbers: NumberMode,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("output"),
            ordering: FileOrdering::default(),
            numbers: NumberMode::default(),
        }
    }
}

/// Directories and ordering handed to the level runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelDirs {
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub ordering: FileOrdering,
}

impl LevelDirs {
    /// Standard layout under `root` with default ordering.
    pub fn under(root: &Path) -> Self {
        HarnessConfig::default().resolve(&HarnessPaths::new(root))
    }
}

impl HarnessConfig {
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.data_dir.as_os_str().is_empty() {
            return Err("data_dir must not be empty".to_string());
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err("output_dir must not be empty".to_string());
        }
        Ok(())
    }

    /// Resolve configured directories against the harness root.
    pub fn resolve(&self, paths: &HarnessPaths) -> LevelDirs {
        LevelDirs {
            data_dir: paths.resolve(&self.data_dir),
            output_dir: paths.resolve(&self.output_dir),
            ordering: self.ordering,
        }
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `HarnessConfig::default()`.
pub fn load_config(path: &Path) -> Result<HarnessConfig> {
    if !path.exists() {
        return Ok(HarnessConfig::default());
    }
    let contents = fs::read_to_string(path).map_err(|err| config_error(path, err))?;
    let cfg: HarnessConfig = toml::from_str(&contents).map_err(|err| config_error(path, err))?;
    cfg.validate().map_err(|message| config_error(path, message))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &HarnessConfig) -> Result<()> {
    cfg.validate().map_err(|message| config_error(path, message))?;
    let mut buf = toml::to_string_pretty(cfg).map_err(|err| config_error(path, err))?;
    buf.push('\n');
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, buf).map_err(|source| HarnessError::WriteError {
        path: tmp_path.clone(),
        source,
    })?;
    fs::rename(&tmp_path, path).map_err(|source| HarnessError::WriteError {
        path: path.to_path_buf(),
        source,
    })
}

fn config_error(path: &Path, message: impl ToString) -> HarnessError {
    HarnessError::Config {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}
