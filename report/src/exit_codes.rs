//! Stable exit codes for report CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to an invalid config, failure file, or other errors.
pub const INVALID: i32 = 1;
/// No diagnostic is available for the given assertion or identifier.
pub const NO_DIAGNOSTIC: i32 = 2;
