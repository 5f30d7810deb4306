//! I/O helpers for report commands.

pub mod config;
pub mod failures;
