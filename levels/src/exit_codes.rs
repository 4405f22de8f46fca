//! Stable exit codes for the CLI.

/// Every discovered file was processed.
pub const OK: i32 = 0;
/// The run failed (missing directory, unreadable input, transform error, ...).
pub const FAILED: i32 = 1;
/// No solver is registered for the requested level.
pub const UNKNOWN_LEVEL: i32 = 2;
