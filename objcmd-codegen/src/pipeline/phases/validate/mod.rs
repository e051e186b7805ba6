//! Validate phase - runs lints on the manifest and schema graph.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::{Lint, LintInfo};
pub use lints::{EmptySelectionLint, MissingDescriptionLint, UnknownModelLint};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that checks the manifest using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a validate phase with the default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(UnknownModelLint),
                Box::new(EmptySelectionLint),
                Box::new(MissingDescriptionLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check the manifest against the schema graph"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        for lint in &self.lints {
            lint.check(&ctx.manifest, &ctx.graph, &mut ctx.diagnostics);
        }

        // Warnings and notes are allowed
        if ctx.has_errors() {
            bail!("Validation failed with {} error(s)", ctx.error_count());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use objcmd_ir::SchemaGraph;
    use objcmd_manifest::Manifest;

    use super::*;
    use crate::pipeline::Diagnostic;

    fn manifest() -> Manifest {
        "[project]\nname = \"garage\"\nschema = \"models.json\"\n"
            .parse()
            .unwrap()
    }

    #[test]
    fn test_default_lints() {
        assert_eq!(
            ValidatePhase::new().lint_names(),
            ["unknown-model", "empty-selection", "missing-description"]
        );
        assert!(ValidatePhase::empty().lint_names().is_empty());
    }

    #[test]
    fn test_with_errors() {
        struct AlwaysErrorLint;
        impl Lint for AlwaysErrorLint {
            fn name(&self) -> &'static str {
                "always-error"
            }
            fn description(&self) -> &'static str {
                "Always produces an error"
            }
            fn check(&self, _: &Manifest, _: &SchemaGraph, diagnostics: &mut Vec<Diagnostic>) {
                diagnostics.push(Diagnostic::error("validate", "forced error"));
            }
        }

        let mut ctx = CompilationContext::new(manifest(), SchemaGraph::new());
        let result = ValidatePhase::empty().with_lint(AlwaysErrorLint).run(&mut ctx);

        assert!(result.is_err());
        assert!(ctx.has_errors());
    }

    #[test]
    fn test_warnings_allowed() {
        // An empty graph selects nothing, which only warns
        let mut ctx = CompilationContext::new(manifest(), SchemaGraph::new());
        let result = ValidatePhase::empty().with_lint(EmptySelectionLint).run(&mut ctx);

        assert!(result.is_ok());
        assert!(ctx.has_warnings());
        assert!(!ctx.has_errors());
    }
}
