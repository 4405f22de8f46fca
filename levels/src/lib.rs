//! Batch harness for level-based puzzle inputs.
//!
//! For a level `N`, every `data/levelN_<variant>.in` file is read, handed to
//! a level solver as a list of lines, and the solver's lines are written to
//! `output/levelN_<variant>.out`. The crate keeps a strict split:
//!
//! - **[`core`]**: Pure logic (file-name matching, ordering, number parsing,
//!   output naming, the [`core::transform::LineTransform`] contract).
//! - **[`io`]**: Filesystem access (config, discovery, line files).
//!
//! [`run`] ties the two together; [`solvers`] holds the per-level transforms.

pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod run;
pub mod solvers;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crate::core::transform::LineTransform;
pub use crate::error::{HarnessError, Result};
pub use crate::run::{RunSummary, run_level};
