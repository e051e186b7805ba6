//! Analyze phase - computes summary figures over the projected commands.

use eyre::Result;

use crate::{
    ProjectionStats,
    pipeline::{CompilationContext, Phase},
};

/// Phase that computes [`ProjectionStats`].
///
/// Must run after `ProjectPhase`.
pub struct AnalyzePhase;

impl Phase for AnalyzePhase {
    fn name(&self) -> &'static str {
        "analyze"
    }

    fn description(&self) -> &'static str {
        "Compute summary figures over projected commands"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let commands = ctx.commands.as_ref().ok_or_else(|| {
            eyre::eyre!("commands not set - AnalyzePhase must run after ProjectPhase")
        })?;

        ctx.stats = Some(ProjectionStats::from_commands(commands));
        Ok(())
    }
}
