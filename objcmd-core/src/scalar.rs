//! Scalar value types understood by the schema graph.

use serde::{Deserialize, Serialize};

/// A leaf value type that is neither an object, a boolean nor a binary payload.
///
/// This is a language-agnostic representation; sinks decide how each one is
/// spelled in the generated source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScalarType {
    String,
    Int32,
    Int64,
    Float,
    Double,
    DateTime,
    Date,
    Uuid,
    Uri,
    /// Base64-encoded bytes carried as text.
    Byte,
}

impl ScalarType {
    /// Get the schema spelling of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarType::String => "string",
            ScalarType::Int32 => "int32",
            ScalarType::Int64 => "int64",
            ScalarType::Float => "float",
            ScalarType::Double => "double",
            ScalarType::DateTime => "date-time",
            ScalarType::Date => "date",
            ScalarType::Uuid => "uuid",
            ScalarType::Uri => "uri",
            ScalarType::Byte => "byte",
        }
    }

    /// Returns true for whole-number types.
    pub fn is_integer(&self) -> bool {
        matches!(self, ScalarType::Int32 | ScalarType::Int64)
    }

    /// Returns true for floating-point types.
    pub fn is_float(&self) -> bool {
        matches!(self, ScalarType::Float | ScalarType::Double)
    }
}

impl std::fmt::Display for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
