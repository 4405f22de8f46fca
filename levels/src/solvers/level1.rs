//! Level 1: final height of each flight.
//!
//! Input: a flight count `n`, then `n` lines of space-separated velocities.
//! Output: one line per flight with the sum of its velocities.

use anyhow::{Context, Result, anyhow};

use crate::core::numbers::{NumberMode, parse_count, parse_numbers_with};
use crate::core::transform::LineTransform;

#[derive(Debug, Clone, Copy, Default)]
pub struct FlightHeights {
    mode: NumberMode,
}

impl FlightHeights {
    pub fn new(mode: NumberMode) -> Self {
        Self { mode }
    }
}

impl LineTransform for FlightHeights {
    fn transform(&self, lines: &[String]) -> Result<Vec<String>> {
        let header = lines.first().ok_or_else(|| anyhow!("missing flight count"))?;
        let flights = parse_count(header).context("parse flight count")?;

        let mut results = Vec::with_capacity(flights);
        for index in 1..=flights {
            let line = lines
                .get(index)
                .ok_or_else(|| anyhow!("expected {flights} flights, found {}", index - 1))?;
            let velocities = parse_numbers_with(line, self.mode)
                .with_context(|| format!("parse velocities of flight {index}"))?;
            results.push(final_height(&velocities).to_string());
        }
        Ok(results)
    }
}

/// Height reached from the ground after applying every velocity in turn.
///
/// Written with `f64`'s `Display`, which never switches to exponent notation.
pub fn final_height(velocities: &[f64]) -> f64 {
    velocities.iter().fold(0.0, |height, velocity| height + velocity)
}
