//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{Manifest, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "objcmd.toml")
    }
}

impl Manifest {
    /// Parse an objcmd.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse an objcmd.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename).push("project");
    let project = &manifest.project;

    ctx.validate_non_empty("name", &project.name)?;

    if !project.noun_prefix.is_empty() {
        ctx.validate_identifier("noun_prefix", &project.noun_prefix, "noun prefix")?;
    }

    if project.schema.as_os_str().is_empty() {
        return Err(ctx
            .source_context()
            .validation_error("'project.schema' must name a schema document", None));
    }

    Ok(())
}
