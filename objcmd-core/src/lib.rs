//! Core utilities and types for the objcmd generator.
//!
//! This crate provides fundamental types and utilities used across
//! the objcmd workspace.

mod file;
mod scalar;
mod utils;

// File operations
pub use file::{Artifact, WriteResult};
// Fundamental types
pub use scalar::ScalarType;
// String utilities
pub use utils::{pascal_join, strip_line_breaks, to_camel_case, to_pascal_case};
