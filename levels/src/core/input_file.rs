//! Input file naming convention: `level<N>_<variant>.in`.

use std::cmp::Ordering;
use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Suffix distinguishing files within a level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Variant {
    /// The literal `example` tag.
    Example,
    /// A decimal index, kept verbatim (leading zeros are allowed).
    Index(String),
}

impl Variant {
    /// Compare by meaning: `example` first, then numeric value.
    ///
    /// Digit strings are compared without parsing so arbitrarily long indices
    /// never overflow. `1`, `01` and `001` compare equal.
    pub fn semantic_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Variant::Example, Variant::Example) => Ordering::Equal,
            (Variant::Example, Variant::Index(_)) => Ordering::Less,
            (Variant::Index(_), Variant::Example) => Ordering::Greater,
            (Variant::Index(a), Variant::Index(b)) => {
                let a = a.trim_start_matches('0');
                let b = b.trim_start_matches('0');
                a.len().cmp(&b.len()).then_with(|| a.cmp(b))
            }
        }
    }
}

/// How discovered files are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOrdering {
    /// Byte order of the full file name.
    #[default]
    Lexicographic,
    /// `example` first, then ascending numeric index; ties by file name.
    Variant,
}

/// A discovered input file for one level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    pub level: u32,
    pub variant: Variant,
    pub file_name: String,
    pub path: PathBuf,
}

static FILE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^level([0-9]+)_([0-9]+|example)\.in$").unwrap());

/// Parse an input file name, returning its variant when it belongs to `level`.
///
/// The level in the name must match exactly as written: `level01_1.in` does
/// not belong to level 1.
pub fn parse_file_name(name: &str, level: u32) -> Option<Variant> {
    let caps = FILE_NAME_RE.captures(name)?;
    if &caps[1] != level.to_string().as_str() {
        return None;
    }
    let variant = &caps[2];
    if variant == "example" {
        Some(Variant::Example)
    } else {
        Some(Variant::Index(variant.to_string()))
    }
}

/// Sort files in place according to `ordering`.
pub fn sort_input_files(files: &mut [InputFile], ordering: FileOrdering) {
    match ordering {
        FileOrdering::Lexicographic => files.sort_by(|a, b| a.file_name.cmp(&b.file_name)),
        FileOrdering::Variant => files.sort_by(|a, b| {
            a.variant
                .semantic_cmp(&b.variant)
                .then_with(|| a.file_name.cmp(&b.file_name))
        }),
    }
}
