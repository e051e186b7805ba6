//! Explain operation - how one model is projected.

use eyre::{Result, eyre};
use objcmd_ir::SchemaGraph;
use objcmd_manifest::Manifest;

use super::{describe, run_pipeline, select_models};
use crate::reports::{ExplainReport, ParameterInfo};

/// Execute the explain operation for `model`, selected or not.
pub fn explain(manifest: &Manifest, graph: SchemaGraph, model: &str) -> Result<ExplainReport> {
    let ctx = run_pipeline(select_models(manifest, &[model.to_string()]), graph)?;
    let command = ctx
        .command_for(model)
        .ok_or_else(|| eyre!("model '{}' is not an object model", model))?;
    let root = &command.target.backing_field;

    let parameters = command
        .parameters
        .iter()
        .map(|p| ParameterInfo {
            name: p.name.clone(),
            representation: p.representation.to_string(),
            declared_type: p.declared_type.to_string(),
            mandatory: p.mandatory,
            target: p.target(root),
            guards: p
                .accessor_path
                .guards(root)
                .iter()
                .map(|g| g.to_string())
                .collect(),
            binding: p.binding.label().to_string(),
            help_text: p.help_text.clone(),
        })
        .collect();

    Ok(ExplainReport {
        command: command.target.name.clone(),
        model: command.target.model.clone(),
        output_type: command.target.output_type.clone(),
        backing_field: root.clone(),
        description: command.target.description.clone(),
        parameters,
        warnings: ctx.warnings().map(describe).collect(),
    })
}
