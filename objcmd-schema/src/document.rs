//! Serialized shape of a schema graph document.

use indexmap::IndexMap;
use serde::Deserialize;

/// Root of a schema graph document.
#[derive(Debug, Deserialize)]
pub(crate) struct RawDocument {
    #[serde(default)]
    pub models: IndexMap<String, RawSchema>,
}

/// A model, property or inline schema as written in the document.
///
/// Keys the loader does not understand (`title`, `example`, ...) are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawSchema {
    #[serde(rename = "type")]
    pub ty: Option<String>,
    pub format: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub all_of: Vec<String>,
    pub discriminator: Option<serde_json::Value>,
    #[serde(rename = "x-polymorphic", default)]
    pub polymorphic: bool,
    pub additional_properties: Option<AdditionalProperties>,
    pub required: Option<Required>,
    #[serde(default)]
    pub properties: IndexMap<String, RawSchema>,
    #[serde(rename = "$ref")]
    pub reference: Option<String>,
    pub items: Option<Box<RawSchema>>,
    #[serde(default)]
    pub read_only: bool,
    #[serde(rename = "x-namespace")]
    pub namespace: Option<String>,
}

/// `additionalProperties`: a flag or the schema of the extra values.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum AdditionalProperties {
    Allowed(bool),
    Schema(Box<RawSchema>),
}

/// `required`: a flag on a property, or the list of required keys on an object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Required {
    Flag(bool),
    Names(Vec<String>),
}

impl RawSchema {
    /// Returns true if the object lists `key` as required.
    pub fn requires(&self, key: &str) -> bool {
        matches!(&self.required, Some(Required::Names(names)) if names.iter().any(|n| n == key))
    }

    /// Returns true if a property schema carries `required: true` itself.
    pub fn is_required_flag(&self) -> bool {
        matches!(self.required, Some(Required::Flag(true)))
    }

    /// Returns true if extra properties are accepted.
    pub fn allows_additional(&self) -> bool {
        match &self.additional_properties {
            Some(AdditionalProperties::Allowed(allowed)) => *allowed,
            Some(AdditionalProperties::Schema(_)) => true,
            None => false,
        }
    }

    /// Schema of the extra values, when given as a schema.
    pub fn additional_schema(&self) -> Option<&RawSchema> {
        match &self.additional_properties {
            Some(AdditionalProperties::Schema(schema)) => Some(schema),
            _ => None,
        }
    }

    pub fn is_polymorphic(&self) -> bool {
        self.discriminator.is_some() || self.polymorphic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_forms() {
        let object: RawSchema =
            serde_json::from_str(r#"{ "required": ["name"], "properties": {} }"#).unwrap();
        assert!(object.requires("name"));
        assert!(!object.requires("id"));
        assert!(!object.is_required_flag());

        let property: RawSchema =
            serde_json::from_str(r#"{ "type": "string", "required": true }"#).unwrap();
        assert!(property.is_required_flag());
        assert!(!property.requires("name"));
    }

    #[test]
    fn test_additional_properties_forms() {
        let flag: RawSchema = serde_json::from_str(r#"{ "additionalProperties": true }"#).unwrap();
        assert!(flag.allows_additional());
        assert!(flag.additional_schema().is_none());

        let schema: RawSchema =
            serde_json::from_str(r#"{ "additionalProperties": { "type": "string" } }"#).unwrap();
        assert!(schema.allows_additional());
        assert_eq!(
            schema.additional_schema().and_then(|s| s.ty.as_deref()),
            Some("string")
        );

        let closed: RawSchema =
            serde_json::from_str(r#"{ "additionalProperties": false }"#).unwrap();
        assert!(!closed.allows_additional());
    }

    #[test]
    fn test_polymorphic_markers() {
        let by_discriminator: RawSchema =
            serde_json::from_str(r#"{ "discriminator": "kind" }"#).unwrap();
        let by_extension: RawSchema =
            serde_json::from_str(r#"{ "x-polymorphic": true }"#).unwrap();
        assert!(by_discriminator.is_polymorphic());
        assert!(by_extension.is_polymorphic());
        assert!(!RawSchema::default().is_polymorphic());
    }
}
