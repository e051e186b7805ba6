//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// Name and description of a phase, for reports.
#[derive(Debug, Clone)]
pub struct PhaseInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A step of the pipeline.
///
/// Built-in phases:
/// - `ValidatePhase` - lints the manifest against the schema graph
/// - `ProjectPhase` - projects every selected model into a command
/// - `AnalyzePhase` - computes summary figures over the commands
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics and plugin hooks).
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Run this phase on the compilation context.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase fails fatally. Non-fatal issues are
    /// recorded as diagnostics instead.
    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;

    fn info(&self) -> PhaseInfo {
        PhaseInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
