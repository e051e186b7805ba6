//! Lint trait for manifest validation.

use objcmd_ir::SchemaGraph;
use objcmd_manifest::Manifest;

use crate::pipeline::Diagnostic;

/// Name and description of a lint, for reports.
#[derive(Debug, Clone)]
pub struct LintInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A check of the manifest against the loaded schema graph.
pub trait Lint: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Check the manifest and add any diagnostics.
    fn check(&self, manifest: &Manifest, graph: &SchemaGraph, diagnostics: &mut Vec<Diagnostic>);

    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
