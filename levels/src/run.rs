//! Orchestration for `levels run`: discover, read, transform, write.
//!
//! Files are processed one at a time in discovery order. The first failure
//! aborts the whole run; outputs already written for earlier files are left
//! in place.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::core::output_name::output_path;
use crate::core::transform::LineTransform;
use crate::error::{HarnessError, Result};
use crate::io::config::LevelDirs;
use crate::io::lines::{read_lines, write_lines};
use crate::io::locator::list_input_files;

/// One input file that was transformed and written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedFile {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Number of lines the transform produced.
    pub lines_written: usize,
}

/// Result of a completed level run, in processing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub level: u32,
    pub files: Vec<ProcessedFile>,
}

/// Run `transform` over every input file discovered for `level`.
///
/// Prints one `level <N>: <input> -> <output>` notice per file.
#[instrument(skip_all, fields(level = level, data_dir = %dirs.data_dir.display()))]
pub fn run_level<T>(dirs: &LevelDirs, level: u32, transform: &T) -> Result<RunSummary>
where
    T: LineTransform + ?Sized,
{
    let inputs = list_input_files(&dirs.data_dir, level, dirs.ordering)?;
    info!(count = inputs.len(), "input files discovered");

    let mut files = Vec::with_capacity(inputs.len());
    for input in &inputs {
        let processed = process_file(&input.path, &dirs.output_dir, transform)?;
        println!(
            "level {level}: {} -> {}",
            display_name(&processed.input),
            display_name(&processed.output)
        );
        files.push(processed);
    }
    Ok(RunSummary { level, files })
}

/// Read `input`, transform its lines and write the result into `output_dir`.
pub fn process_file<T>(input: &Path, output_dir: &Path, transform: &T) -> Result<ProcessedFile>
where
    T: LineTransform + ?Sized,
{
    let output = output_path(input, output_dir)?;
    let lines = read_lines(input)?;
    let result = transform
        .transform(&lines)
        .map_err(|source| HarnessError::Transform {
            path: input.to_path_buf(),
            source,
        })?;
    write_lines(&output, &result)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        lines = result.len(),
        "file processed"
    );
    Ok(ProcessedFile {
        input: input.to_path_buf(),
        output,
        lines_written: result.len(),
    })
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::fs;

    use anyhow::anyhow;

    use super::*;
    use crate::core::input_file::FileOrdering;
    use crate::test_support::TestLayout;

    fn echo(lines: &[String]) -> anyhow::Result<Vec<String>> {
        Ok(lines.to_vec())
    }

    #[test]
    fn writes_one_output_per_input_in_order() {
        let layout = TestLayout::new().expect("layout");
        layout.write_input("level2_example.in", "a\nb\n").expect("input");
        layout.write_input("level2_1.in", "c").expect("input");
        layout.write_input("level3_1.in", "other level\n").expect("input");

        let summary = run_level(&layout.dirs(), 2, &echo).expect("run");
        let outputs: Vec<String> = summary
            .files
            .iter()
            .map(|file| display_name(&file.output))
            .collect();
        assert_eq!(outputs, vec!["level2_1.out", "level2_example.out"]);
        assert_eq!(layout.read_output("level2_example.out").expect("out"), "a\nb\n");
        assert_eq!(layout.read_output("level2_1.out").expect("out"), "c\n");
        assert!(!layout.output_dir().join("level3_1.out").exists());
    }

    #[test]
    fn variant_ordering_processes_example_first() {
        let layout = TestLayout::new().expect("layout");
        layout.write_input("level2_example.in", "x\n").expect("input");
        layout.write_input("level2_1.in", "y\n").expect("input");
        let dirs = LevelDirs {
            ordering: FileOrdering::Variant,
            ..layout.dirs()
        };

        let summary = run_level(&dirs, 2, &echo).expect("run");
        assert_eq!(display_name(&summary.files[0].input), "level2_example.in");
        assert_eq!(display_name(&summary.files[1].input), "level2_1.in");
    }

    #[test]
    fn no_inputs_means_no_writes() {
        let layout = TestLayout::new().expect("layout");
        let calls = Cell::new(0);
        let counting = |lines: &[String]| -> anyhow::Result<Vec<String>> {
            calls.set(calls.get() + 1);
            Ok(lines.to_vec())
        };

        let summary = run_level(&layout.dirs(), 9, &counting).expect("run");
        assert!(summary.files.is_empty());
        assert_eq!(calls.get(), 0);
        let written = fs::read_dir(layout.output_dir()).expect("read output").count();
        assert_eq!(written, 0);
    }

    #[test]
    fn transform_failure_aborts_remaining_files() {
        let layout = TestLayout::new().expect("layout");
        layout.write_input("level5_1.in", "ok\n").expect("input");
        layout.write_input("level5_2.in", "boom\n").expect("input");
        layout.write_input("level5_3.in", "ok\n").expect("input");
        let failing = |lines: &[String]| -> anyhow::Result<Vec<String>> {
            if lines.iter().any(|line| line == "boom") {
                return Err(anyhow!("cannot solve"));
            }
            Ok(lines.to_vec())
        };

        let err = run_level(&layout.dirs(), 5, &failing).expect_err("should abort");
        match err {
            HarnessError::Transform { path, source } => {
                assert_eq!(display_name(&path), "level5_2.in");
                assert_eq!(source.to_string(), "cannot solve");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(layout.output_dir().join("level5_1.out").exists());
        assert!(!layout.output_dir().join("level5_2.out").exists());
        assert!(!layout.output_dir().join("level5_3.out").exists());
    }

    #[test]
    fn missing_output_directory_is_write_error() {
        let layout = TestLayout::new().expect("layout");
        layout.write_input("level1_1.in", "1\n").expect("input");
        fs::remove_dir(layout.output_dir()).expect("remove output dir");

        let err = run_level(&layout.dirs(), 1, &echo).expect_err("no output dir");
        assert!(matches!(err, HarnessError::WriteError { .. }));
        assert!(!layout.output_dir().exists());
    }

    #[test]
    fn missing_data_directory_fails_before_any_work() {
        let layout = TestLayout::new().expect("layout");
        fs::remove_dir(layout.data_dir()).expect("remove data dir");

        let err = run_level(&layout.dirs(), 1, &echo).expect_err("no data dir");
        assert!(matches!(err, HarnessError::DirectoryNotFound { .. }));
    }

    #[test]
    fn process_file_rejects_malformed_name_before_reading() {
        let layout = TestLayout::new().expect("layout");
        let input = layout.data_dir().join("level1_2.txt");

        let err = process_file(&input, layout.output_dir(), &echo).expect_err("bad name");
        assert!(matches!(err, HarnessError::MalformedOutputName { .. }));
    }

    #[test]
    fn boxed_transforms_are_accepted() {
        let layout = TestLayout::new().expect("layout");
        layout.write_input("level6_1.in", "q\n").expect("input");
        let boxed: Box<dyn LineTransform> = Box::new(echo);

        let summary = run_level(&layout.dirs(), 6, boxed.as_ref()).expect("run");
        assert_eq!(summary.files[0].lines_written, 1);
    }
}
