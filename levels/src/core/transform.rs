//! The per-level transform contract.

use anyhow::Result;

/// A pure mapping from input lines to output lines.
///
/// Implemented for every `Fn(&[String]) -> anyhow::Result<Vec<String>>`, so
/// plain functions and closures can be passed to the runner directly.
pub trait LineTransform {
    fn transform(&self, lines: &[String]) -> Result<Vec<String>>;
}

impl<F> LineTransform for F
where
    F: Fn(&[String]) -> Result<Vec<String>>,
{
    fn transform(&self, lines: &[String]) -> Result<Vec<String>> {
        self(lines)
    }
}
