//! Project operation - write the parameter document.

use std::path::Path;

use eyre::{Result, WrapErr};
use objcmd_codegen::{JsonSink, ParameterSink};
use objcmd_core::{Artifact, WriteResult};
use objcmd_ir::SchemaGraph;
use objcmd_manifest::Manifest;

use super::{describe, run_pipeline, select_models};
use crate::reports::{ProjectReport, ProjectResult};

/// Options for the project operation.
pub struct ProjectOptions<'a> {
    pub output: &'a Path,
    pub dry_run: bool,
    /// Overrides the manifest's model selection when non-empty.
    pub models: &'a [String],
}

/// Execute the project operation.
pub fn project(
    manifest: &Manifest,
    graph: SchemaGraph,
    options: &ProjectOptions,
) -> Result<ProjectReport> {
    let ctx = run_pipeline(select_models(manifest, options.models), graph)?;

    let mut sink = JsonSink::new(&manifest.project.name, Vec::new());
    for command in ctx.commands() {
        sink.accept(command)?;
    }
    sink.finish()?;
    let content =
        String::from_utf8(sink.into_inner()).wrap_err("parameter document is not UTF-8")?;

    let result = if options.dry_run {
        tracing::debug!(bytes = content.len(), "dry run, not writing parameter document");
        ProjectResult::Preview { content }
    } else {
        let written = Artifact::new(options.output, content).write()?;
        match written {
            WriteResult::Written => {
                tracing::info!(path = %options.output.display(), "wrote parameter document")
            }
            WriteResult::Unchanged => {
                tracing::info!(path = %options.output.display(), "parameter document is up to date")
            }
        }
        ProjectResult::Written {
            path: options.output.to_path_buf(),
            changed: written == WriteResult::Written,
        }
    };

    Ok(ProjectReport {
        project: manifest.project.name.clone(),
        warnings: ctx.warnings().map(describe).collect(),
        stats: ctx.stats.clone().unwrap_or_default(),
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::fixtures;

    #[test]
    fn test_project_writes_once() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out").join("objcmd.params.json");
        let options = ProjectOptions {
            output: &output,
            dry_run: false,
            models: &[],
        };

        let first = project(&fixtures::manifest(""), fixtures::graph(), &options).unwrap();
        assert!(matches!(first.result, ProjectResult::Written { changed: true, .. }));
        assert_eq!(first.stats.commands, 2);

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written["project"], "garage");
        assert_eq!(written["commands"][0]["target"]["name"], "NewCarObject");

        let second = project(&fixtures::manifest(""), fixtures::graph(), &options).unwrap();
        assert!(matches!(second.result, ProjectResult::Written { changed: false, .. }));
    }

    #[test]
    fn test_project_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("objcmd.params.json");
        let models = ["Color".to_string()];
        let options = ProjectOptions {
            output: &output,
            dry_run: true,
            models: &models,
        };

        let report = project(&fixtures::manifest(""), fixtures::graph(), &options).unwrap();
        let ProjectResult::Preview { content } = report.result else {
            panic!("expected a preview");
        };
        assert!(content.contains("\"NewColorObject\""));
        assert!(!content.contains("\"NewCarObject\""));
        assert!(!output.exists());
    }
}
