//! Command targets and their projected parameter lists.

use serde::Serialize;

use crate::ParameterDescriptor;

/// Identity of one generated command; also the scope for parameter names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandTarget {
    /// Command verb (always "New").
    pub verb: String,
    /// Command noun (e.g., "AzCarObject").
    pub noun: String,
    /// Full command name (e.g., "NewAzCarObject").
    pub name: String,
    /// Model the command instantiates.
    pub model: String,
    /// Root of every accessor path (e.g., "_car").
    pub backing_field: String,
    /// Namespace-qualified type of the produced instance.
    pub output_type: String,
    pub description: String,
}

/// A command together with its ordered parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectedCommand {
    pub target: CommandTarget,
    pub parameters: Vec<ParameterDescriptor>,
}

impl ProjectedCommand {
    /// Look up a parameter by its allocated name.
    pub fn parameter(&self, name: &str) -> Option<&ParameterDescriptor> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Names of all parameters, in order.
    pub fn parameter_names(&self) -> Vec<&str> {
        self.parameters.iter().map(|p| p.name.as_str()).collect()
    }
}
