//! Pipeline plugin trait.

use eyre::Result;

use super::CompilationContext;

/// Receives callbacks around every phase of a pipeline run.
///
/// # Example
///
/// ```ignore
/// struct WarningsAsErrors;
///
/// impl Plugin for WarningsAsErrors {
///     fn name(&self) -> &'static str { "warnings-as-errors" }
///
///     fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
///         if ctx.has_warnings() {
///             eyre::bail!("{} produced warnings", phase);
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Plugin: Send + Sync {
    fn name(&self) -> &'static str;

    /// Called before a phase runs. Returning an error aborts the pipeline.
    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }

    /// Called after a phase completes. Returning an error aborts the pipeline.
    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }
}
