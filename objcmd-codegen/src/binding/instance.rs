use std::collections::{HashMap, HashSet};

use objcmd_ir::{BindingTemplate, ParameterDescriptor, ProjectedCommand};
use serde_json::{Map, Value, json};

use super::{
    BindError, PathResolver,
    value::{parse_bool, parse_value},
};

/// Builds the instance a generated command would produce.
///
/// Distinct property names can fold to the same member (`a_b` and `aB` are
/// both `AB`). The parameters stay distinct, but only one of them may be
/// bound; the other is rejected instead of overwriting it.
pub struct InstanceBuilder<'c, R: ?Sized> {
    command: &'c ProjectedCommand,
    resolver: &'c R,
    root: Map<String, Value>,
    bound: HashSet<String>,
    /// Assignment target → parameter that wrote it.
    owners: HashMap<String, String>,
}

impl<'c, R: PathResolver + ?Sized> InstanceBuilder<'c, R> {
    pub fn new(command: &'c ProjectedCommand, resolver: &'c R) -> Self {
        Self {
            command,
            resolver,
            root: Map::new(),
            bound: HashSet::new(),
            owners: HashMap::new(),
        }
    }

    /// Bind one parameter.
    ///
    /// `value` is `None` when a toggle is given without an explicit value.
    pub fn set(&mut self, name: &str, value: Option<&str>) -> Result<(), BindError> {
        let command = self.command;
        let parameter = command
            .parameter(name)
            .ok_or_else(|| BindError::UnknownParameter {
                command: command.target.name.clone(),
                parameter: name.to_string(),
            })?;

        let target = parameter.target(&command.target.backing_field);
        if let Some(owner) = self.owners.get(&target) {
            if owner != &parameter.name {
                return Err(BindError::invalid(
                    &parameter.name,
                    format!("'{}' is already bound through '{}'", target, owner),
                ));
            }
        }

        let bound = match &parameter.binding {
            BindingTemplate::Assign => {
                let raw = required_value(parameter, value)?;
                parse_value(&parameter.name, &parameter.declared_type, raw)?
            }
            BindingTemplate::SwitchToBool => match value {
                None => Value::Bool(true),
                Some(raw) => Value::Bool(parse_bool(&parameter.name, raw)?),
            },
            BindingTemplate::ResolveSingleFile {
                not_found,
                ambiguous,
            } => {
                let raw = required_value(parameter, value)?;
                self.open_single_file(parameter, raw, not_found, ambiguous)?
            }
        };

        tracing::debug!(
            command = %command.target.name,
            parameter = %parameter.name,
            target = %target,
            "bound parameter"
        );
        self.container(parameter)?
            .insert(parameter.member.clone(), bound);
        self.bound.insert(parameter.name.clone());
        self.owners.insert(target, parameter.name.clone());
        Ok(())
    }

    /// Names bound so far.
    pub fn is_bound(&self, name: &str) -> bool {
        self.bound.contains(name)
    }

    /// Finish the instance, failing if a mandatory parameter was never bound.
    pub fn finish(self) -> Result<Value, BindError> {
        let missing: Vec<String> = self
            .command
            .parameters
            .iter()
            .filter(|p| p.mandatory && !self.bound.contains(&p.name))
            .map(|p| p.name.clone())
            .collect();
        if !missing.is_empty() {
            return Err(BindError::MissingMandatory { names: missing });
        }
        Ok(Value::Object(self.root))
    }

    /// Walk the accessor path, creating empty containers where needed.
    fn container(
        &mut self,
        parameter: &ParameterDescriptor,
    ) -> Result<&mut Map<String, Value>, BindError> {
        let mut current = &mut self.root;
        for step in parameter.accessor_path.steps() {
            let slot = current.entry(step.member.clone()).or_insert(Value::Null);
            if slot.is_null() {
                *slot = Value::Object(Map::new());
            }
            current = match slot {
                Value::Object(map) => map,
                _ => {
                    return Err(BindError::invalid(
                        &parameter.name,
                        format!("'{}' already holds a non-object value", step.member),
                    ));
                }
            };
        }
        Ok(current)
    }

    fn open_single_file(
        &self,
        parameter: &ParameterDescriptor,
        raw: &str,
        not_found: &str,
        ambiguous: &str,
    ) -> Result<Value, BindError> {
        let matches = self.resolver.resolve(raw)?;
        match matches.as_slice() {
            [] => Err(BindError::NotFound {
                parameter: parameter.name.clone(),
                message: not_found.replace("{value}", raw),
            }),
            [path] => {
                let file = std::fs::File::open(path).map_err(|e| BindError::io(path, e))?;
                let length = file.metadata().map_err(|e| BindError::io(path, e))?.len();
                Ok(json!({
                    "path": path.display().to_string(),
                    "length": length,
                }))
            }
            _ => {
                let listed: Vec<String> = matches.iter().map(|p| p.display().to_string()).collect();
                Err(BindError::Ambiguous {
                    parameter: parameter.name.clone(),
                    message: ambiguous
                        .replace("{value}", raw)
                        .replace("{matches}", &listed.join(", ")),
                    matches: listed,
                })
            }
        }
    }
}

fn required_value<'v>(
    parameter: &ParameterDescriptor,
    value: Option<&'v str>,
) -> Result<&'v str, BindError> {
    value.ok_or_else(|| BindError::invalid(&parameter.name, "a value is required"))
}
