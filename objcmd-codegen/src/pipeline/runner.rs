//! Pipeline orchestrator.

use eyre::Result;
use objcmd_ir::SchemaGraph;
use objcmd_manifest::Manifest;

use super::{
    CompilationContext, Phase, PhaseInfo, Plugin,
    phases::{AnalyzePhase, ProjectPhase, ValidatePhase},
};

/// Runs the built-in phases, then any user phases, calling plugin hooks
/// around each one.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .plugin(MyPlugin::new())
///     .phase(MyCustomPhase);
///
/// let ctx = pipeline.run(manifest, graph)?;
/// ```
pub struct Pipeline {
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a pipeline with the default lints and no extra phases.
    pub fn new() -> Self {
        Self {
            validate: ValidatePhase::new(),
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Replace the validate phase, e.g. to change its lints.
    pub fn validate(mut self, validate: ValidatePhase) -> Self {
        self.validate = validate;
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run every phase over `manifest` and `graph`.
    ///
    /// Order: validate, project, analyze, then user phases.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase or plugin hook fails fatally.
    pub fn run(&self, manifest: Manifest, graph: SchemaGraph) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(manifest, graph);
        self.execute(&mut ctx)?;
        Ok(ctx)
    }

    /// Run every phase over an existing context.
    ///
    /// Unlike [`run`](Self::run), the context and its diagnostics stay
    /// available to the caller when a phase fails.
    pub fn execute(&self, ctx: &mut CompilationContext) -> Result<()> {
        for phase in self.phases() {
            self.run_phase(phase, ctx)?;
        }
        Ok(())
    }

    /// Name and description of every phase, in execution order.
    pub fn phase_info(&self) -> Vec<PhaseInfo> {
        self.phases().map(|p| p.info()).collect()
    }

    fn phases(&self) -> impl Iterator<Item = &(dyn Phase + 'static)> {
        let builtin: [&(dyn Phase + 'static); 3] = [&self.validate, &ProjectPhase, &AnalyzePhase];
        builtin
            .into_iter()
            .chain(self.phases.iter().map(|p| p.as_ref()))
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();
        tracing::debug!(phase = phase_name, "running phase");

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
