//! New operation - build an instance from parameter values.

use std::path::Path;

use eyre::{Result, WrapErr, eyre};
use objcmd_codegen::binding::{FsPathResolver, InstanceBuilder};
use objcmd_ir::SchemaGraph;
use objcmd_manifest::Manifest;
use serde_json::Value;

use super::{run_pipeline, select_models};

/// Options for the new operation.
pub struct NewOptions<'a> {
    pub model: &'a str,
    /// `NAME=VALUE` assignments, or a bare `NAME` for a toggle.
    pub values: &'a [String],
    /// Directory relative file paths are resolved from.
    pub base: &'a Path,
}

/// Execute the new operation.
pub fn new_instance(
    manifest: &Manifest,
    graph: SchemaGraph,
    options: &NewOptions,
) -> Result<Value> {
    let ctx = run_pipeline(select_models(manifest, &[options.model.to_string()]), graph)?;
    let command = ctx
        .command_for(options.model)
        .ok_or_else(|| eyre!("model '{}' is not an object model", options.model))?;

    let resolver = FsPathResolver::new(options.base);
    let mut builder = InstanceBuilder::new(command, &resolver);
    for assignment in options.values {
        let (name, value) = parse_assignment(assignment);
        tracing::debug!(command = %command.target.name, parameter = name, "binding value");
        builder
            .set(name, value)
            .wrap_err_with(|| format!("failed to bind '{}'", name))?;
    }
    Ok(builder.finish()?)
}

fn parse_assignment(assignment: &str) -> (&str, Option<&str>) {
    match assignment.split_once('=') {
        Some((name, value)) => (name.trim(), Some(value)),
        None => (assignment.trim(), None),
    }
}
