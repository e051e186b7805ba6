//! Lint for parameters that will get placeholder help text.

use objcmd_ir::SchemaGraph;
use objcmd_manifest::Manifest;

use super::super::Lint;
use crate::{
    HELP_MESSAGE_MISSING, ProjectionConfig, Projector,
    pipeline::{Diagnostic, selected_models},
};

/// Notes parameters of selected models that will have no help text.
///
/// Models are projected the way the `project` phase does it, so only
/// properties that become parameters are reported: leaves of inlined
/// branches and of `allOf` components included, inlined containers not.
pub struct MissingDescriptionLint;

impl Lint for MissingDescriptionLint {
    fn name(&self) -> &'static str {
        "missing-description"
    }

    fn description(&self) -> &'static str {
        "Note parameters that will lack help text"
    }

    fn check(&self, manifest: &Manifest, graph: &SchemaGraph, diagnostics: &mut Vec<Diagnostic>) {
        let config = ProjectionConfig::from(&manifest.project);
        let projector = Projector::new(graph, &config);

        for (model, id) in selected_models(manifest, graph) {
            // Projection failures are reported by the project phase.
            let Ok((command, _)) = projector.project_command(id) else {
                tracing::trace!(model, "skipping help text check for unprojectable model");
                continue;
            };

            let undocumented = command
                .parameters
                .iter()
                .filter(|p| p.help_text == HELP_MESSAGE_MISSING);

            for parameter in undocumented {
                diagnostics.push(
                    Diagnostic::info(
                        "validate",
                        format!(
                            "parameter '{}.{}' has no description; help text will be '{}'",
                            command.target.name, parameter.name, HELP_MESSAGE_MISSING
                        ),
                    )
                    .at(format!("models.{}.{}", model, parameter.name)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(schema: &str) -> Vec<Diagnostic> {
        let manifest: Manifest = "[project]\nname = \"garage\"\nschema = \"models.json\"\n"
            .parse()
            .unwrap();
        let graph = objcmd_schema::parse_str(schema).unwrap();
        let mut diagnostics = Vec::new();
        MissingDescriptionLint.check(&manifest, &graph, &mut diagnostics);
        diagnostics
    }

    fn locations(diagnostics: &[Diagnostic]) -> Vec<&str> {
        diagnostics
            .iter()
            .filter_map(|d| d.location.as_deref())
            .collect()
    }

    #[test]
    fn test_documented_properties() {
        let diagnostics = check(
            r#"{ "models": { "Car": { "properties": {
                "name": { "type": "string", "description": "Car name" }
            } } } }"#,
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_missing_and_empty_descriptions() {
        let diagnostics = check(
            r#"{ "models": { "Car": { "properties": {
                "name": { "type": "string" },
                "plate": { "type": "string", "description": "" },
                "id": { "type": "string", "readOnly": true }
            } } } }"#,
        );

        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.iter().all(|d| !d.severity.is_error()));
        assert_eq!(
            diagnostics[0].message,
            "parameter 'NewCarObject.Name' has no description; help text will be 'HELP MESSAGE MISSING'"
        );
        assert_eq!(locations(&diagnostics), ["models.Car.Name", "models.Car.Plate"]);
    }

    #[test]
    fn test_follows_inlining_and_composition() {
        let diagnostics = check(
            r#"{ "models": {
                "Vehicle": { "properties": { "wheels": { "type": "integer" } } },
                "Car": { "allOf": ["Vehicle"], "properties": {
                    "properties": { "type": "object", "properties": {
                        "enabled": { "type": "boolean", "description": "Enabled" },
                        "manual": { "type": "string", "format": "binary" }
                    } }
                } }
            } }"#,
        );

        // Vehicle projects on its own too.
        assert_eq!(
            locations(&diagnostics),
            ["models.Vehicle.Wheels", "models.Car.Wheels", "models.Car.Manual"]
        );
    }

    #[test]
    fn test_cyclic_models_are_left_to_projection() {
        let diagnostics = check(
            r#"{ "models": { "Node": { "properties": { "next": { "$ref": "Node" } } } } }"#,
        );
        assert!(diagnostics.is_empty());
    }
}
