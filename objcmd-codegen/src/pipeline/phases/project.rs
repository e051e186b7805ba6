//! Project phase - turns every selected model into a command.

use eyre::{Result, bail};

use crate::{
    CollectingSink, ParameterSink, ProjectionConfig, Projector,
    pipeline::{CompilationContext, Diagnostic, Phase, selected_models},
};

/// Phase that runs the projector once per selected model, each with a
/// fresh scope.
pub struct ProjectPhase;

impl Phase for ProjectPhase {
    fn name(&self) -> &'static str {
        "project"
    }

    fn description(&self) -> &'static str {
        "Project selected models into flat parameter lists"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let config = ProjectionConfig::from(&ctx.manifest.project);
        let projector = Projector::new(&ctx.graph, &config);
        let mut sink = CollectingSink::new();

        for (model, id) in selected_models(&ctx.manifest, &ctx.graph) {
            let location = format!("models.{}", model);
            match projector.project_command(id) {
                Ok((command, warnings)) => {
                    for warning in warnings {
                        ctx.diagnostics.push(
                            Diagnostic::warning(self.name(), warning.to_string()).at(&location),
                        );
                    }
                    sink.accept(&command)?;
                }
                Err(err) => {
                    ctx.diagnostics
                        .push(Diagnostic::error(self.name(), err.to_string()).at(&location));
                    bail!("Projection of model '{}' failed", model);
                }
            }
        }

        sink.finish()?;
        tracing::info!(commands = sink.len(), "projected models");
        ctx.commands = Some(sink.into_commands());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use objcmd_ir::SchemaGraph;
    use objcmd_manifest::Manifest;

    use super::*;

    fn context(manifest: &str, schema: &str) -> CompilationContext {
        let manifest: Manifest = format!(
            "[project]\nname = \"garage\"\nschema = \"models.json\"\n{}",
            manifest
        )
        .parse()
        .unwrap();
        let graph: SchemaGraph = objcmd_schema::parse_str(schema).unwrap();
        CompilationContext::new(manifest, graph)
    }

    #[test]
    fn test_projects_selected_models_in_order() {
        let mut ctx = context(
            "noun_prefix = \"Az\"\n[models]\nexclude = [\"Engine\"]\n",
            r#"{ "models": {
                "Engine": { "properties": { "power": { "type": "integer" } } },
                "Car": { "properties": { "name": { "type": "string" } } },
                "Boat": { "properties": { "hull": { "type": "string" } } }
            } }"#,
        );

        ProjectPhase.run(&mut ctx).unwrap();

        let names: Vec<&str> = ctx.commands().iter().map(|c| c.target.name.as_str()).collect();
        assert_eq!(names, ["NewAzCarObject", "NewAzBoatObject"]);
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_polymorphic_model_warns_once() {
        let mut ctx = context(
            "",
            r#"{ "models": {
                "Vehicle": {
                    "discriminator": "kind",
                    "properties": { "kind": { "type": "string" } }
                },
                "Car": { "allOf": ["Vehicle"], "properties": { "name": { "type": "string" } } }
            } }"#,
        );

        ProjectPhase.run(&mut ctx).unwrap();

        let warnings: Vec<String> = ctx.warnings().map(|d| d.to_string()).collect();
        assert_eq!(
            warnings,
            [
                "warning: schema 'Vehicle' is polymorphic; only its base shape is projected \
                 (at models.Vehicle)",
                "warning: schema 'Vehicle' is polymorphic; only its base shape is projected \
                 (at models.Car)",
            ]
        );
        assert_eq!(ctx.commands().len(), 2);
    }

    #[test]
    fn test_cycle_is_an_error() {
        let mut ctx = context(
            "",
            r#"{ "models": {
                "Node": { "properties": { "next": { "$ref": "Node" } } }
            } }"#,
        );

        let err = ProjectPhase.run(&mut ctx).unwrap_err();

        assert_eq!(err.to_string(), "Projection of model 'Node' failed");
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(
            ctx.errors().next().unwrap().to_string(),
            "error: cyclic schema: Node -> Node (at models.Node)"
        );
        assert!(ctx.commands.is_none());
    }
}
