//! Parameter descriptors: the projector's output unit.

use objcmd_core::ScalarType;
use serde::{Serialize, Serializer};

use crate::AccessorPath;

/// Failure message when a file-path parameter matches nothing.
///
/// `{value}` is replaced with the bound path.
pub const FILE_NOT_FOUND_MESSAGE: &str = "Unable to locate file '{value}'";

/// Failure message when a file-path parameter matches several files.
///
/// `{value}` is replaced with the bound path, `{matches}` with the
/// comma-separated list of matched paths.
pub const FILE_AMBIGUOUS_MESSAGE: &str = "'{value}' matches more than one file: {matches}";

/// How a parameter is presented at the invocation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepresentationKind {
    /// The bound value is assigned to the field as is.
    Plain,
    /// A toggle converted to the underlying boolean.
    Flag,
    /// A path string resolved to exactly one file and opened for reading.
    FilePath,
}

impl RepresentationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepresentationKind::Plain => "plain",
            RepresentationKind::Flag => "flag",
            RepresentationKind::FilePath => "file-path",
        }
    }
}

impl std::fmt::Display for RepresentationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the bound value reaches the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum BindingTemplate {
    /// Direct assignment.
    Assign,
    /// `field = toggle.is_present()`.
    SwitchToBool,
    /// Resolve the path to exactly one file and open a read stream into the field.
    ResolveSingleFile {
        not_found: &'static str,
        ambiguous: &'static str,
    },
}

impl BindingTemplate {
    /// The file-resolution template with the standard failure messages.
    pub fn resolve_single_file() -> Self {
        BindingTemplate::ResolveSingleFile {
            not_found: FILE_NOT_FOUND_MESSAGE,
            ambiguous: FILE_AMBIGUOUS_MESSAGE,
        }
    }

    /// Short name used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            BindingTemplate::Assign => "assign",
            BindingTemplate::SwitchToBool => "switch-to-bool",
            BindingTemplate::ResolveSingleFile { .. } => "resolve-single-file",
        }
    }
}

/// Type of a parameter as seen by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeclaredType {
    Scalar(ScalarType),
    Boolean,
    Binary,
    /// Tri-state toggle standing in for a boolean field.
    Switch,
    /// Filesystem path standing in for a binary field.
    Path,
    /// A named model promoted as one parameter.
    Model(String),
    Array(Box<DeclaredType>),
    Map(Box<DeclaredType>),
}

impl std::fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeclaredType::Scalar(scalar) => write!(f, "{}", scalar),
            DeclaredType::Boolean => f.write_str("boolean"),
            DeclaredType::Binary => f.write_str("binary"),
            DeclaredType::Switch => f.write_str("switch"),
            DeclaredType::Path => f.write_str("path"),
            DeclaredType::Model(name) => f.write_str(name),
            DeclaredType::Array(item) => write!(f, "{}[]", item),
            DeclaredType::Map(value) => write!(f, "map<{}>", value),
        }
    }
}

impl Serialize for DeclaredType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One parameter of a generated command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterDescriptor {
    /// Unique within the command.
    pub name: String,
    pub representation: RepresentationKind,
    pub declared_type: DeclaredType,
    pub mandatory: bool,
    /// Description with line breaks stripped, or a placeholder.
    pub help_text: String,
    /// Path to the container holding `member`.
    pub accessor_path: AccessorPath,
    /// Field assigned on the last container of the path.
    pub member: String,
    pub binding: BindingTemplate,
}

impl ParameterDescriptor {
    /// Full assignment target, e.g. "_car.Properties.Name".
    pub fn target(&self, root: &str) -> String {
        format!("{}.{}", self.accessor_path.render(root), self.member)
    }
}
