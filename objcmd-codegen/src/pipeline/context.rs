//! Compilation context passed through pipeline phases.

use objcmd_ir::{ProjectedCommand, SchemaGraph, SchemaId};
use objcmd_manifest::Manifest;

use super::diagnostic::{Diagnostic, Severity};
use crate::ProjectionStats;

/// State carried through every phase of one pipeline run.
#[derive(Debug)]
pub struct CompilationContext {
    pub manifest: Manifest,
    /// The loaded schema graph; phases only read it.
    pub graph: SchemaGraph,
    /// One command per selected model (populated by `ProjectPhase`).
    pub commands: Option<Vec<ProjectedCommand>>,
    /// Summary figures (populated by `AnalyzePhase`).
    pub stats: Option<ProjectionStats>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(manifest: Manifest, graph: SchemaGraph) -> Self {
        Self {
            manifest,
            graph,
            commands: None,
            stats: None,
            diagnostics: Vec::new(),
        }
    }

    /// Models the manifest selects, in graph order.
    pub fn selected_models(&self) -> Vec<(&str, SchemaId)> {
        selected_models(&self.manifest, &self.graph)
    }

    /// Projected commands, empty until `ProjectPhase` has run.
    pub fn commands(&self) -> &[ProjectedCommand] {
        self.commands.as_deref().unwrap_or_default()
    }

    /// Look up the projected command of a model.
    pub fn command_for(&self, model: &str) -> Option<&ProjectedCommand> {
        self.commands().iter().find(|c| c.target.model == model)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }
}

/// Object models of `graph` that `manifest` selects, in graph order.
pub fn selected_models<'g>(
    manifest: &Manifest,
    graph: &'g SchemaGraph,
) -> Vec<(&'g str, SchemaId)> {
    graph
        .models()
        .filter(|(name, id)| graph[*id].kind.is_object() && manifest.models.selects(name))
        .collect()
}
