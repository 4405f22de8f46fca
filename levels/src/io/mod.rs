//! I/O helpers: configuration, input discovery and line files.

pub mod config;
pub mod init;
pub mod lines;
pub mod locator;
pub mod paths;
