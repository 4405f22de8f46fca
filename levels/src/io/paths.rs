//! Canonical filesystem layout for a harness root.

use std::path::{Path, PathBuf};

/// Root used when no `--root` is given: the directory the crate was built from.
pub fn install_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// All canonical paths for a harness root.
#[derive(Debug, Clone)]
pub struct HarnessPaths {
    pub root: PathBuf,
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub config_path: PathBuf,
}

impl HarnessPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            data_dir: root.join("data"),
            output_dir: root.join("output"),
            config_path: root.join("levels.toml"),
            root,
        }
    }

    /// Resolve `path` against the root unless it is already absolute.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}
