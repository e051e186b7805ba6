use std::path::PathBuf;

use serde::Deserialize;

/// Inlining threshold used when `max_inlined_parameters` is not set.
pub const DEFAULT_MAX_INLINED_PARAMETERS: usize = 4;

/// `[project]` table
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Generated module name (e.g., "Contoso.Garage")
    pub name: String,

    /// Schema graph document, relative to objcmd.toml
    pub schema: PathBuf,

    /// Prefix placed in front of every command noun
    #[serde(default)]
    pub noun_prefix: String,

    /// Objects with at most this many own properties are flattened into the parent
    #[serde(default = "default_max_inlined_parameters")]
    pub max_inlined_parameters: usize,
}

fn default_max_inlined_parameters() -> usize {
    DEFAULT_MAX_INLINED_PARAMETERS
}
