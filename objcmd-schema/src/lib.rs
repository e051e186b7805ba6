//! Loading of resolved schema graph documents.
//!
//! The upstream resolver hands over a JSON document whose `models` table
//! describes every named type. Properties refer to other models by name
//! (`$ref`) or describe an anonymous inline schema; references may point
//! forward or form cycles.
//!
//! ```text
//! models.json → parse_file → SchemaGraph
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod document;
mod error;
mod load;

pub use error::{Error, Result, SourceContext};
pub use load::{parse_file, parse_str, parse_str_with_filename};
