//! List operation - models and their commands.

use eyre::Result;
use objcmd_ir::SchemaGraph;
use objcmd_manifest::Manifest;

use super::run_pipeline;
use crate::reports::{ListEntry, ListReport};

/// Execute the list operation.
pub fn list(manifest: &Manifest, graph: SchemaGraph) -> Result<ListReport> {
    let ctx = run_pipeline(manifest.clone(), graph)?;

    let entries = ctx
        .graph
        .models()
        .filter(|(_, id)| ctx.graph[*id].kind.is_object())
        .map(|(model, _)| match ctx.command_for(model) {
            Some(command) => ListEntry {
                model: model.to_string(),
                command: Some(command.target.name.clone()),
                parameters: command.parameters.len(),
            },
            None => ListEntry {
                model: model.to_string(),
                command: None,
                parameters: 0,
            },
        })
        .collect();

    Ok(ListReport { entries })
}
