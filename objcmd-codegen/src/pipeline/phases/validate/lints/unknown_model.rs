//! Lint for model selections that name nothing in the schema.

use objcmd_ir::SchemaGraph;
use objcmd_manifest::Manifest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Errors on `[models] include` entries that match no model of the graph.
pub struct UnknownModelLint;

impl Lint for UnknownModelLint {
    fn name(&self) -> &'static str {
        "unknown-model"
    }

    fn description(&self) -> &'static str {
        "Detect included models that the schema does not define"
    }

    fn check(&self, manifest: &Manifest, graph: &SchemaGraph, diagnostics: &mut Vec<Diagnostic>) {
        let models: Vec<&str> = graph.models().map(|(name, _)| name).collect();
        for pattern in manifest.models.unmatched_includes(&models) {
            diagnostics.push(
                Diagnostic::error(
                    "validate",
                    format!("model '{}' is not defined by the schema", pattern),
                )
                .at("models.include"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use objcmd_ir::SchemaNode;

    use super::*;

    fn graph() -> SchemaGraph {
        let mut graph = SchemaGraph::new();
        graph.add_model(SchemaNode::object("Car"));
        graph.add_model(SchemaNode::object("CarColor"));
        graph
    }

    fn check(models: &str) -> Vec<Diagnostic> {
        let manifest: Manifest = format!(
            "[project]\nname = \"garage\"\nschema = \"models.json\"\n[models]\n{}",
            models
        )
        .parse()
        .unwrap();
        let mut diagnostics = Vec::new();
        UnknownModelLint.check(&manifest, &graph(), &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_known_models_and_patterns() {
        assert!(check("include = [\"Car\", \"Car*\"]").is_empty());
    }

    #[test]
    fn test_unknown_model() {
        let diagnostics = check("include = [\"Car\", \"Truck\", \"Bus*\"]");

        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.iter().all(|d| d.severity.is_error()));
        assert_eq!(
            diagnostics[0].to_string(),
            "error: model 'Truck' is not defined by the schema (at models.include)"
        );
        assert!(diagnostics[1].message.contains("Bus*"));
    }

    #[test]
    fn test_excludes_are_not_checked() {
        assert!(check("exclude = [\"Truck\"]").is_empty());
    }
}
