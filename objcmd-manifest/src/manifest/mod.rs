//! Manifest types and parsing for objcmd.toml files.

mod file;
mod models;
mod parse;
mod project;
mod validate;

pub use file::ObjcmdToml;
pub use models::ModelSelection;
pub use parse::parse_manifest;
pub use project::{DEFAULT_MAX_INLINED_PARAMETERS, ProjectConfig};
use serde::Deserialize;
pub use validate::ParseContext;

/// Root manifest for objcmd.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Project metadata and projection settings
    pub project: ProjectConfig,

    /// Which schema models get a command
    #[serde(default)]
    pub models: ModelSelection,
}
