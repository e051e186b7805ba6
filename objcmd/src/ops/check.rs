//! Check operation - manifest and schema validation.

use std::path::Path;

use objcmd_codegen::pipeline::{CompilationContext, Pipeline, Severity};
use objcmd_ir::SchemaGraph;
use objcmd_manifest::Manifest;

use super::describe;
use crate::reports::{CheckReport, CheckSummary};

/// Execute the check operation.
///
/// Runs every phase and returns the diagnostics, whether or not the
/// pipeline got to the end.
pub fn check(manifest: &Manifest, graph: SchemaGraph, config_path: &Path) -> CheckReport {
    let mut ctx = CompilationContext::new(manifest.clone(), graph);
    let outcome = Pipeline::new().execute(&mut ctx);

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &ctx.diagnostics {
        let msg = describe(diag);
        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    let summary = match outcome {
        Ok(()) => ctx.stats.as_ref().map(|stats| CheckSummary {
            project: manifest.project.name.clone(),
            commands: stats.commands,
            parameters: stats.parameters,
        }),
        Err(err) => {
            if errors.is_empty() {
                errors.push(format!("{:#}", err));
            }
            None
        }
    };

    CheckReport {
        config_path: config_path.to_path_buf(),
        errors,
        warnings,
        infos,
        summary,
    }
}
