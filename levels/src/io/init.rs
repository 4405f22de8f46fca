//! Scaffolding for a fresh harness root.

use std::fs;
use std::path::Path;

use crate::error::{HarnessError, Result};
use crate::io::config::{HarnessConfig, write_config};
use crate::io::paths::HarnessPaths;

/// Options for `init_layout`.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// If true, overwrite an existing `levels.toml`.
    pub force: bool,
}

/// Create `data/`, `output/` and a default `levels.toml` under `root`.
///
/// Existing directories are kept. An existing config is only replaced when
/// `options.force` is set.
pub fn init_layout(root: &Path, options: &InitOptions) -> Result<HarnessPaths> {
    let paths = HarnessPaths::new(root);
    create_dir(&paths.data_dir)?;
    create_dir(&paths.output_dir)?;
    if options.force || !paths.config_path.exists() {
        write_config(&paths.config_path, &HarnessConfig::default())?;
    }
    Ok(paths)
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| HarnessError::WriteError {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::config::load_config;

    #[test]
    fn creates_layout_and_default_config() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = init_layout(temp.path(), &InitOptions { force: false }).expect("init");
        assert!(paths.data_dir.is_dir());
        assert!(paths.output_dir.is_dir());
        assert_eq!(
            load_config(&paths.config_path).expect("load"),
            HarnessConfig::default()
        );
    }

    #[test]
    fn keeps_existing_config_unless_forced() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = HarnessPaths::new(temp.path());
        fs::write(&paths.config_path, "ordering = \"variant\"\n").expect("seed");

        init_layout(temp.path(), &InitOptions { force: false }).expect("init");
        let kept = fs::read_to_string(&paths.config_path).expect("read");
        assert_eq!(kept, "ordering = \"variant\"\n");

        init_layout(temp.path(), &InitOptions { force: true }).expect("init");
        assert_eq!(
            load_config(&paths.config_path).expect("load"),
            HarnessConfig::default()
        );
    }
}
