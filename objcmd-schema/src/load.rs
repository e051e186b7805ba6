//! Building a [`SchemaGraph`] from a schema document.

use std::path::Path;

use indexmap::IndexMap;
use objcmd_core::{ScalarType, to_pascal_case};
use objcmd_ir::{PropertyNode, SchemaGraph, SchemaId, SchemaKind, SchemaNode};

use crate::{
    Error, Result,
    document::{RawDocument, RawSchema},
    error::SourceContext,
};

/// Parse a schema document from the given path.
pub fn parse_file(path: impl AsRef<Path>) -> Result<SchemaGraph> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    parse_str_with_filename(&content, &path.display().to_string())
}

/// Parse a schema document from a string (uses "models.json" as filename).
pub fn parse_str(content: &str) -> Result<SchemaGraph> {
    parse_str_with_filename(content, "models.json")
}

/// Parse a schema document from a string with a custom filename for error reporting.
pub fn parse_str_with_filename(content: &str, filename: &str) -> Result<SchemaGraph> {
    let source = SourceContext::new(content, filename);
    let document: RawDocument =
        serde_json::from_str(content).map_err(|e| source.syntax_error(e))?;

    let graph = Loader::new(&source, &document.models).load()?;
    tracing::debug!(
        file = filename,
        models = document.models.len(),
        nodes = graph.len(),
        "loaded schema graph"
    );
    Ok(graph)
}

/// Kind of a raw schema before its children are linked.
enum Shape<'r> {
    Scalar(ScalarType),
    Boolean,
    Binary,
    Object,
    Array(&'r RawSchema),
    Map(&'r RawSchema),
}

struct Loader<'a> {
    source: &'a SourceContext,
    models: &'a IndexMap<String, RawSchema>,
    graph: SchemaGraph,
}

impl<'a> Loader<'a> {
    fn new(source: &'a SourceContext, models: &'a IndexMap<String, RawSchema>) -> Self {
        Self {
            source,
            models,
            graph: SchemaGraph::new(),
        }
    }

    fn load(mut self) -> Result<SchemaGraph> {
        let models = self.models;

        // Register every model first so references may point forward or back.
        let ids: Vec<SchemaId> = models
            .keys()
            .map(|name| self.graph.add_model(SchemaNode::object(name.as_str())))
            .collect();

        for ((name, raw), id) in models.iter().zip(ids) {
            let node = self.build_node(name, raw, None, name)?;
            if let Some(slot) = self.graph.get_mut(id) {
                *slot = node;
            }
        }
        Ok(self.graph)
    }

    /// Build the node for a model or inline schema named `name`.
    ///
    /// `location` is the dotted document path used in error messages.
    fn build_node(
        &mut self,
        name: &str,
        raw: &RawSchema,
        inherited_namespace: Option<&str>,
        location: &str,
    ) -> Result<SchemaNode> {
        let namespace = raw
            .namespace
            .as_deref()
            .or(inherited_namespace)
            .map(str::to_string);

        let kind = match self.shape(raw, location)? {
            Shape::Scalar(scalar) => SchemaKind::Scalar(scalar),
            Shape::Boolean => SchemaKind::Boolean,
            Shape::Binary => SchemaKind::Binary,
            Shape::Object => SchemaKind::Object,
            Shape::Array(items) => {
                let item_name = format!("{}Item", name);
                let item_location = format!("{}.items", location);
                SchemaKind::Array(self.resolve(
                    items,
                    &item_name,
                    namespace.as_deref(),
                    &item_location,
                )?)
            }
            Shape::Map(values) => {
                let value_name = format!("{}Value", name);
                let value_location = format!("{}.additionalProperties", location);
                SchemaKind::Map(self.resolve(
                    values,
                    &value_name,
                    namespace.as_deref(),
                    &value_location,
                )?)
            }
        };

        let mut node = SchemaNode::new(name, kind);
        node.namespace = namespace;
        node.description = raw.description.clone();
        node.additional_properties = raw.allows_additional();
        node.is_polymorphic = raw.is_polymorphic();

        for base in &raw.all_of {
            node.all_of.push(self.resolve_all_of(base, location)?);
        }

        for (key, property) in &raw.properties {
            let inline_name = format!("{}{}", name, to_pascal_case(key));
            let property_location = format!("{}.{}", location, key);
            let schema = self.resolve(
                property,
                &inline_name,
                node.namespace.as_deref(),
                &property_location,
            )?;

            let mut prop = PropertyNode::new(key.as_str(), schema);
            prop.required = raw.requires(key) || property.is_required_flag();
            prop.read_only = property.read_only;
            prop.description = property.description.clone();
            node.properties.insert(key.clone(), prop);
        }

        Ok(node)
    }

    /// Resolve a property, item or value schema to a node id.
    fn resolve(
        &mut self,
        raw: &RawSchema,
        inline_name: &str,
        namespace: Option<&str>,
        location: &str,
    ) -> Result<SchemaId> {
        if let Some(reference) = &raw.reference {
            return self
                .graph
                .model(reference)
                .ok_or_else(|| self.source.unknown_reference_error(reference, location));
        }

        let node_name = match self.shape(raw, location)? {
            Shape::Scalar(scalar) => scalar.as_str().to_string(),
            Shape::Boolean => "boolean".to_string(),
            Shape::Binary => "binary".to_string(),
            Shape::Object | Shape::Array(_) | Shape::Map(_) => inline_name.to_string(),
        };
        let node = self.build_node(&node_name, raw, namespace, location)?;
        Ok(self.graph.add(node))
    }

    fn resolve_all_of(&self, base: &str, location: &str) -> Result<SchemaId> {
        let id = self
            .graph
            .model(base)
            .ok_or_else(|| self.source.unknown_reference_error(base, location))?;

        let is_object = match self.models.get(base) {
            Some(raw) => matches!(self.shape(raw, base)?, Shape::Object),
            None => false,
        };
        if !is_object {
            return Err(self.source.all_of_not_object_error(base, location));
        }
        Ok(id)
    }

    fn shape<'r>(&self, raw: &'r RawSchema, location: &str) -> Result<Shape<'r>> {
        let format = raw.format.as_deref();
        let shape = match raw.ty.as_deref() {
            None | Some("object") => match raw.additional_schema() {
                Some(values) if raw.properties.is_empty() && raw.all_of.is_empty() => {
                    Shape::Map(values)
                }
                _ => Shape::Object,
            },
            Some("string") => match format {
                Some("binary") => Shape::Binary,
                other => Shape::Scalar(string_format(other)),
            },
            Some("integer") => match format {
                Some("int64") => Shape::Scalar(ScalarType::Int64),
                _ => Shape::Scalar(ScalarType::Int32),
            },
            Some("number") => match format {
                Some("float") => Shape::Scalar(ScalarType::Float),
                _ => Shape::Scalar(ScalarType::Double),
            },
            Some("boolean") => Shape::Boolean,
            Some("file") => Shape::Binary,
            Some("array") => match raw.items.as_deref() {
                Some(items) => Shape::Array(items),
                None => {
                    return Err(self
                        .source
                        .invalid_schema_error(location, "array schema has no 'items'"));
                }
            },
            Some(other) => {
                return Err(self
                    .source
                    .invalid_schema_error(location, format!("unknown type '{}'", other)));
            }
        };
        Ok(shape)
    }
}

fn string_format(format: Option<&str>) -> ScalarType {
    match format {
        Some("date-time") => ScalarType::DateTime,
        Some("date") => ScalarType::Date,
        Some("uuid") => ScalarType::Uuid,
        Some("uri") => ScalarType::Uri,
        Some("byte") => ScalarType::Byte,
        Some(other) => {
            tracing::trace!(format = other, "unrecognized string format, using string");
            ScalarType::String
        }
        None => ScalarType::String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model<'g>(graph: &'g SchemaGraph, name: &str) -> &'g SchemaNode {
        &graph[graph.model(name).unwrap()]
    }

    #[test]
    fn test_scalar_formats() {
        let graph = parse_str(
            r#"{ "models": { "Car": { "properties": {
                "name": { "type": "string" },
                "built": { "type": "string", "format": "date-time" },
                "doors": { "type": "integer" },
                "mileage": { "type": "integer", "format": "int64" },
                "price": { "type": "number" },
                "ratio": { "type": "number", "format": "float" },
                "vin": { "type": "string", "format": "uuid" },
                "plate": { "type": "string", "format": "licence" }
            } } } }"#,
        )
        .unwrap();

        let car = model(&graph, "Car");
        let kinds: Vec<SchemaKind> = car
            .properties
            .values()
            .map(|p| graph[p.schema].kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                SchemaKind::Scalar(ScalarType::String),
                SchemaKind::Scalar(ScalarType::DateTime),
                SchemaKind::Scalar(ScalarType::Int32),
                SchemaKind::Scalar(ScalarType::Int64),
                SchemaKind::Scalar(ScalarType::Double),
                SchemaKind::Scalar(ScalarType::Float),
                SchemaKind::Scalar(ScalarType::Uuid),
                SchemaKind::Scalar(ScalarType::String),
            ]
        );
    }

    #[test]
    fn test_boolean_binary_and_file() {
        let graph = parse_str(
            r#"{ "models": { "Car": { "properties": {
                "enabled": { "type": "boolean" },
                "manual": { "type": "string", "format": "binary" },
                "photo": { "type": "file" }
            } } } }"#,
        )
        .unwrap();

        let car = model(&graph, "Car");
        assert_eq!(graph[car.properties["enabled"].schema].kind, SchemaKind::Boolean);
        assert_eq!(graph[car.properties["manual"].schema].kind, SchemaKind::Binary);
        assert_eq!(graph[car.properties["photo"].schema].kind, SchemaKind::Binary);
    }

    #[test]
    fn test_required_and_read_only() {
        let graph = parse_str(
            r#"{ "models": { "Car": {
                "required": ["name"],
                "properties": {
                    "name": { "type": "string", "description": "Car name" },
                    "id": { "type": "string", "readOnly": true },
                    "model": { "type": "string", "required": true }
                }
            } } }"#,
        )
        .unwrap();

        let car = model(&graph, "Car");
        assert!(car.properties["name"].required);
        assert_eq!(car.properties["name"].description.as_deref(), Some("Car name"));
        assert!(car.properties["id"].read_only);
        assert!(!car.properties["id"].required);
        assert!(car.properties["model"].required);
    }

    #[test]
    fn test_references_share_model_node() {
        let graph = parse_str(
            r#"{ "models": {
                "Car": { "properties": {
                    "bodyColor": { "$ref": "Color" },
                    "hoodColor": { "$ref": "Color" }
                } },
                "Color": { "properties": { "hex": { "type": "string" } } }
            } }"#,
        )
        .unwrap();

        let car = model(&graph, "Car");
        let color = graph.model("Color").unwrap();
        assert_eq!(car.properties["bodyColor"].schema, color);
        assert_eq!(car.properties["hoodColor"].schema, color);
        assert_eq!(graph[color].properties.len(), 1);
    }

    #[test]
    fn test_inline_object_gets_synthesized_name() {
        let graph = parse_str(
            r#"{ "models": { "Car": { "x-namespace": "Contoso", "properties": {
                "engine_spec": { "type": "object", "properties": { "power": { "type": "integer" } } }
            } } } }"#,
        )
        .unwrap();

        let car = model(&graph, "Car");
        let engine = &graph[car.properties["engine_spec"].schema];
        assert_eq!(engine.name, "CarEngineSpec");
        assert_eq!(engine.full_name(), "Contoso.CarEngineSpec");
        assert!(engine.kind.is_object());
    }

    #[test]
    fn test_arrays_and_maps() {
        let graph = parse_str(
            r#"{ "models": { "Car": { "properties": {
                "tags": { "type": "array", "items": { "type": "string" } },
                "labels": { "type": "object", "additionalProperties": { "type": "string" } },
                "extras": { "type": "object", "additionalProperties": true, "properties": {
                    "note": { "type": "string" }
                } }
            } } } }"#,
        )
        .unwrap();

        let car = model(&graph, "Car");
        let tags = &graph[car.properties["tags"].schema];
        let SchemaKind::Array(item) = tags.kind else {
            panic!("expected array, got {:?}", tags.kind);
        };
        assert_eq!(graph[item].kind, SchemaKind::Scalar(ScalarType::String));

        let labels = &graph[car.properties["labels"].schema];
        assert!(matches!(labels.kind, SchemaKind::Map(_)));
        assert!(labels.additional_properties);

        let extras = &graph[car.properties["extras"].schema];
        assert!(extras.kind.is_object());
        assert!(extras.additional_properties);
    }

    #[test]
    fn test_all_of_and_polymorphism() {
        let graph = parse_str(
            r#"{ "models": {
                "Car": { "allOf": ["Vehicle"], "discriminator": "kind", "properties": {} },
                "Vehicle": { "properties": { "wheels": { "type": "integer" } } }
            } }"#,
        )
        .unwrap();

        let car = model(&graph, "Car");
        assert_eq!(car.all_of, vec![graph.model("Vehicle").unwrap()]);
        assert!(car.is_polymorphic);
        assert!(!model(&graph, "Vehicle").is_polymorphic);
    }

    #[test]
    fn test_cycles_are_loaded() {
        let graph = parse_str(
            r#"{ "models": {
                "Node": { "properties": { "next": { "$ref": "Node" } } }
            } }"#,
        )
        .unwrap();

        let node = graph.model("Node").unwrap();
        assert_eq!(graph[node].properties["next"].schema, node);
    }

    #[test]
    fn test_unknown_reference() {
        let err = parse_str(
            r#"{ "models": { "Car": { "properties": { "engine": { "$ref": "Engine" } } } } }"#,
        )
        .unwrap_err();
        match *err {
            Error::UnknownReference {
                name,
                referrer,
                span,
                ..
            } => {
                assert_eq!(name, "Engine");
                assert_eq!(referrer, "Car.engine");
                assert!(span.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_all_of_must_name_object() {
        let err = parse_str(
            r#"{ "models": {
                "Car": { "allOf": ["Name"] },
                "Name": { "type": "string" }
            } }"#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::AllOfNotObject { ref name, .. } if name == "Name"));
    }

    #[test]
    fn test_syntax_error_is_located() {
        let err = parse_str("{\n  \"models\": {,\n}").unwrap_err();
        match *err {
            Error::Syntax { span, .. } => assert!(span.is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_schema() {
        let err = parse_str(
            r#"{ "models": { "Car": { "properties": { "tags": { "type": "array" } } } } }"#,
        )
        .unwrap_err();
        match *err {
            Error::InvalidSchema {
                location, message, ..
            } => {
                assert_eq!(location, "Car.tags");
                assert_eq!(message, "array schema has no 'items'");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
