//! Per-level solvers registered with the CLI.
//!
//! Solvers sit outside the core: each is a [`LineTransform`] that knows the
//! input schema of exactly one level.

pub mod level1;

use crate::core::numbers::NumberMode;
use crate::core::transform::LineTransform;

/// Levels with a registered solver, ascending.
pub const SOLVED_LEVELS: &[u32] = &[1];

/// Look up the solver for `level`, parsing numbers with `mode`.
pub fn solver_for(level: u32, mode: NumberMode) -> Option<Box<dyn LineTransform>> {
    match level {
        1 => Some(Box::new(level1::FlightHeights::new(mode))),
        _ => None,
    }
}
