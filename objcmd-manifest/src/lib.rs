//! Parsing and validation of `objcmd.toml` project files.
//!
//! ```text
//! objcmd.toml → ObjcmdToml::open → Manifest → pipeline
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    DEFAULT_MAX_INLINED_PARAMETERS, Manifest, ModelSelection, ObjcmdToml, ParseContext,
    ProjectConfig, parse_manifest,
};
