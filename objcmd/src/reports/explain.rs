//! Explain command report data structures.

use super::output::{Output, Report};

/// How one model is projected into a command.
#[derive(Debug)]
pub struct ExplainReport {
    pub command: String,
    pub model: String,
    pub output_type: String,
    pub backing_field: String,
    pub description: String,
    pub parameters: Vec<ParameterInfo>,
    /// Warnings recorded while projecting this model.
    pub warnings: Vec<String>,
}

/// One parameter as a generated command would declare and bind it.
#[derive(Debug)]
pub struct ParameterInfo {
    pub name: String,
    pub representation: String,
    pub declared_type: String,
    pub mandatory: bool,
    /// Assignment target, e.g. `_car.Properties.Enabled`.
    pub target: String,
    /// Lazy-initialization guards, outermost first.
    pub guards: Vec<String>,
    pub binding: String,
    pub help_text: String,
}

impl Report for ExplainReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(&format!("warning: {}", warning));
        }

        out.title(&self.command);
        out.key_value("Model", &self.model);
        out.key_value("Output type", &self.output_type);
        out.key_value("Backing field", &self.backing_field);
        out.key_value("Description", &self.description);
        out.newline();

        if self.parameters.is_empty() {
            out.preformatted("No parameters");
            return;
        }

        out.section("Parameters");
        for (i, parameter) in self.parameters.iter().enumerate() {
            let mandatory = if parameter.mandatory { ", mandatory" } else { "" };
            out.numbered_item(
                i + 1,
                &format!(
                    "{} ({} {}{})",
                    parameter.name, parameter.representation, parameter.declared_type, mandatory
                ),
            );
            for guard in &parameter.guards {
                out.key_value_indented("guard", guard);
            }
            out.key_value_indented("target", &parameter.target);
            out.key_value_indented("binding", &parameter.binding);
            out.key_value_indented("help", &parameter.help_text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::RecordingOutput;

    #[test]
    fn test_render_explain() {
        let report = ExplainReport {
            command: "NewCarObject".into(),
            model: "Car".into(),
            output_type: "Contoso.Car".into(),
            backing_field: "_car".into(),
            description: "Create an in-memory instance of the Car object.".into(),
            parameters: vec![ParameterInfo {
                name: "Enabled".into(),
                representation: "flag".into(),
                declared_type: "switch".into(),
                mandatory: true,
                target: "_car.Properties.Enabled".into(),
                guards: vec!["ensure _car.Properties : CarProperties".into()],
                binding: "switch-to-bool".into(),
                help_text: "Whether the car is enabled".into(),
            }],
            warnings: Vec::new(),
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);
        insta::assert_snapshot!(out.text(), @r"
        NewCarObject
        ============
        Model: Car
        Output type: Contoso.Car
        Backing field: _car
        Description: Create an in-memory instance of the Car object.

        Parameters:
          1. Enabled (flag switch, mandatory)
             guard: ensure _car.Properties : CarProperties
             target: _car.Properties.Enabled
             binding: switch-to-bool
             help: Whether the car is enabled
        ");
    }
}
