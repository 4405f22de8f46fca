//! Deterministic, pure logic shared by the harness.
//!
//! Core modules must be free of I/O side effects. They operate on names,
//! lines and numbers in memory and return deterministic outputs suitable for
//! tests.

pub mod input_file;
pub mod numbers;
pub mod output_name;
pub mod transform;
