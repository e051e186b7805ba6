//! Consumers of projected commands.

use std::io::Write;

use eyre::{Result, WrapErr};
use objcmd_ir::ProjectedCommand;
use serde::Serialize;

/// Receives projected commands in model order.
pub trait ParameterSink {
    /// Consume one command.
    fn accept(&mut self, command: &ProjectedCommand) -> Result<()>;

    /// Called once after the last command.
    fn finish(&mut self) -> Result<()>;
}

/// Keeps every command in memory; the `project` phase fills the pipeline
/// context through one.
#[derive(Debug, Default)]
pub struct CollectingSink {
    commands: Vec<ProjectedCommand>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn into_commands(self) -> Vec<ProjectedCommand> {
        self.commands
    }
}

impl ParameterSink for CollectingSink {
    fn accept(&mut self, command: &ProjectedCommand) -> Result<()> {
        self.commands.push(command.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

#[derive(Serialize)]
struct Document<'a> {
    project: &'a str,
    commands: &'a [ProjectedCommand],
}

/// Render commands as the pretty-printed JSON document written by [`JsonSink`].
pub fn render_json(project: &str, commands: &[ProjectedCommand]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(&Document { project, commands })
        .wrap_err("failed to serialize projected commands")?;
    json.push('\n');
    Ok(json)
}

/// Writes `{ "project": ..., "commands": [...] }` to a writer on finish.
pub struct JsonSink<W: Write> {
    project: String,
    commands: Vec<ProjectedCommand>,
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(project: impl Into<String>, writer: W) -> Self {
        Self {
            project: project.into(),
            commands: Vec::new(),
            writer,
        }
    }

    /// Get the writer back, e.g. to inspect a buffer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ParameterSink for JsonSink<W> {
    fn accept(&mut self, command: &ProjectedCommand) -> Result<()> {
        self.commands.push(command.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let json = render_json(&self.project, &self.commands)?;
        self.writer
            .write_all(json.as_bytes())
            .wrap_err("failed to write projected commands")?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use objcmd_ir::{
        AccessorPath, BindingTemplate, CommandTarget, DeclaredType, ParameterDescriptor,
        RepresentationKind,
    };

    use super::*;

    fn command() -> ProjectedCommand {
        ProjectedCommand {
            target: CommandTarget {
                verb: "New".into(),
                noun: "CarObject".into(),
                name: "NewCarObject".into(),
                model: "Car".into(),
                backing_field: "_car".into(),
                output_type: "Car".into(),
                description: "Create an in-memory instance of the Car object.".into(),
            },
            parameters: vec![ParameterDescriptor {
                name: "Enabled".into(),
                representation: RepresentationKind::Flag,
                declared_type: DeclaredType::Switch,
                mandatory: false,
                help_text: "Whether the car is enabled".into(),
                accessor_path: AccessorPath::root().child("Properties", "CarProperties"),
                member: "Enabled".into(),
                binding: BindingTemplate::SwitchToBool,
            }],
        }
    }

    #[test]
    fn test_collecting_sink() {
        let mut sink = CollectingSink::new();
        sink.accept(&command()).unwrap();
        sink.finish().unwrap();
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.into_commands()[0].target.name, "NewCarObject");
    }

    #[test]
    fn test_json_sink_writes_on_finish() {
        let mut sink = JsonSink::new("Contoso.Garage", Vec::new());
        sink.accept(&command()).unwrap();
        sink.finish().unwrap();

        let written = String::from_utf8(sink.into_inner()).unwrap();
        insta::assert_snapshot!(written, @r#"
{
  "project": "Contoso.Garage",
  "commands": [
    {
      "target": {
        "verb": "New",
        "noun": "CarObject",
        "name": "NewCarObject",
        "model": "Car",
        "backing_field": "_car",
        "output_type": "Car",
        "description": "Create an in-memory instance of the Car object."
      },
      "parameters": [
        {
          "name": "Enabled",
          "representation": "flag",
          "declared_type": "switch",
          "mandatory": false,
          "help_text": "Whether the car is enabled",
          "accessor_path": [
            {
              "member": "Properties",
              "init_type": "CarProperties"
            }
          ],
          "member": "Enabled",
          "binding": {
            "kind": "switch-to-bool"
          }
        }
      ]
    }
  ]
}
"#);
    }

    #[test]
    fn test_render_json_empty() {
        let json = render_json("Garage", &[]).unwrap();
        assert_eq!(json, "{\n  \"project\": \"Garage\",\n  \"commands\": []\n}\n");
    }
}
