//! Human-readable explanations of failed DOM assertions.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (identifier model, outcome
//!   phrases, renderable trees, summary builders and dispatch). No I/O.
//! - **[`io`]**: Config and failure-file loading.
//!
//! [`render`] coordinates the two for CLI commands and [`terminal`] turns the
//! markup produced by the core into colored terminal output.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod render;
pub mod terminal;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
