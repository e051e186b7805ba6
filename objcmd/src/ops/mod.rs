//! Core operations.
//!
//! This module contains the business logic for objcmd commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod explain;
pub mod list;
pub mod new;
pub mod project;

pub use check::check;
use eyre::Result;
pub use explain::explain;
pub use list::list;
pub use new::{NewOptions, new_instance};
use objcmd_codegen::pipeline::{CompilationContext, Diagnostic, Pipeline};
use objcmd_ir::SchemaGraph;
use objcmd_manifest::Manifest;
pub use project::{ProjectOptions, project};

/// Render a diagnostic without its severity, location on its own line.
pub(crate) fn describe(diag: &Diagnostic) -> String {
    match &diag.location {
        Some(loc) => format!("{}\n  --> {}", diag.message, loc),
        None => diag.message.clone(),
    }
}

/// Restrict a manifest to the named models, overriding its own selection.
///
/// An empty list keeps the manifest's selection.
pub(crate) fn select_models(manifest: &Manifest, models: &[String]) -> Manifest {
    let mut manifest = manifest.clone();
    if !models.is_empty() {
        manifest.models.include = Some(models.to_vec());
        manifest.models.exclude.clear();
    }
    manifest
}

/// Run the pipeline; on failure the error carries every error diagnostic.
pub(crate) fn run_pipeline(manifest: Manifest, graph: SchemaGraph) -> Result<CompilationContext> {
    let mut ctx = CompilationContext::new(manifest, graph);
    if let Err(err) = Pipeline::new().execute(&mut ctx) {
        let details: Vec<String> = ctx.errors().map(describe).collect();
        if details.is_empty() {
            return Err(err);
        }
        return Err(err.wrap_err(details.join("\n")));
    }
    Ok(ctx)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_models_overrides_manifest() {
        let manifest = fixtures::manifest("[models]\nexclude = [\"Car\"]\n");

        let selected = select_models(&manifest, &["Car".to_string()]);
        assert!(selected.models.selects("Car"));
        assert!(!selected.models.selects("Color"));

        let unchanged = select_models(&manifest, &[]);
        assert!(!unchanged.models.selects("Car"));
    }

    #[test]
    fn test_run_pipeline_reports_error_diagnostics() {
        let manifest = fixtures::manifest("[models]\ninclude = [\"Truck\"]\n");

        let err = run_pipeline(manifest, fixtures::graph()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "model 'Truck' is not defined by the schema\n  --> models.include"
        );
        assert_eq!(
            err.root_cause().to_string(),
            "Validation failed with 1 error(s)"
        );
    }
}
