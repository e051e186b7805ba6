//! Lint for manifests that select no model at all.

use objcmd_ir::SchemaGraph;
use objcmd_manifest::Manifest;

use super::super::Lint;
use crate::pipeline::{Diagnostic, selected_models};

/// Warns when no object model is left after `include`/`exclude`.
pub struct EmptySelectionLint;

impl Lint for EmptySelectionLint {
    fn name(&self) -> &'static str {
        "empty-selection"
    }

    fn description(&self) -> &'static str {
        "Warn when no object model is selected"
    }

    fn check(&self, manifest: &Manifest, graph: &SchemaGraph, diagnostics: &mut Vec<Diagnostic>) {
        if selected_models(manifest, graph).is_empty() {
            diagnostics.push(
                Diagnostic::warning("validate", "no object model is selected; nothing to project")
                    .at("models"),
            );
        }
    }
}
