//! Deterministic, pure logic for building failure summaries.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod assertion;
pub mod dispatch;
pub mod identifier;
pub mod identifier_parser;
pub mod identifier_render;
pub mod markup;
pub mod operator;
pub mod renderable;
pub mod summary;
