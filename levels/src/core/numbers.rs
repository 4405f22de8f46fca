//! Parsing space-separated numeric lines.
//!
//! Two modes exist. [`NumberMode::Strict`] (the default) rejects empty or
//! malformed tokens with [`HarnessError::ParseError`].
//! [`NumberMode::Permissive`] never fails: malformed tokens become `NaN` and
//! empty tokens become `0`, so bad input shows up as `NaN` in downstream
//! arithmetic.

use serde::{Deserialize, Serialize};

use crate::error::{HarnessError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberMode {
    Permissive,
    #[default]
    Strict,
}

/// Split `line` on single spaces and convert every token, never failing.
pub fn parse_numbers(line: &str) -> Vec<f64> {
    line.split(' ').map(permissive_number).collect()
}

/// Split `line` on single spaces and convert every token, failing on the first
/// empty, malformed or non-finite token.
///
/// Surrounding whitespace within a token (a trailing `\r`, for example) is
/// ignored, as in permissive mode.
pub fn try_parse_numbers(line: &str) -> Result<Vec<f64>> {
    line.split(' ')
        .map(|token| strict_number(token, line))
        .collect()
}

/// Dispatch to [`parse_numbers`] or [`try_parse_numbers`].
pub fn parse_numbers_with(line: &str, mode: NumberMode) -> Result<Vec<f64>> {
    match mode {
        NumberMode::Permissive => Ok(parse_numbers(line)),
        NumberMode::Strict => try_parse_numbers(line),
    }
}

/// Parse a single non-negative count (e.g. the leading "number of cases" line).
pub fn parse_count(line: &str) -> Result<usize> {
    line.trim().parse().map_err(|_| HarnessError::ParseError {
        token: line.to_string(),
        line: line.to_string(),
    })
}

fn permissive_number(token: &str) -> f64 {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

fn strict_number(token: &str, line: &str) -> Result<f64> {
    let parsed = token
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite());
    parsed.ok_or_else(|| HarnessError::ParseError {
        token: token.to_string(),
        line: line.to_string(),
    })
}
