//! Resolved schema graph.
//!
//! Nodes live in an arena owned by [`SchemaGraph`] and refer to each other
//! through [`SchemaId`]. Two properties of the same type share one node, which
//! is also what lets the projector detect a schema that contains itself.

use std::ops::Index;

use indexmap::IndexMap;
use objcmd_core::ScalarType;

/// Identity of a node within one [`SchemaGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SchemaId(usize);

impl SchemaId {
    /// Position of the node in the graph's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Kind of value a schema node describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    /// A single scalar value.
    Scalar(ScalarType),
    /// A true/false value.
    Boolean,
    /// A stream-like payload.
    Binary,
    /// A structured value with named properties.
    Object,
    /// Composite: a sequence of the item schema.
    Array(SchemaId),
    /// Composite: a string-keyed dictionary of the value schema.
    Map(SchemaId),
}

impl SchemaKind {
    /// Returns true if this is an object kind.
    pub fn is_object(&self) -> bool {
        matches!(self, SchemaKind::Object)
    }
}

/// A type description.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNode {
    /// Type name (models keep their declared name, inline schemas get a synthesized one).
    pub name: String,
    /// Optional namespace used to qualify the type name.
    pub namespace: Option<String>,
    /// Value kind.
    pub kind: SchemaKind,
    /// Description of the type.
    pub description: Option<String>,
    /// Properties in declaration order.
    pub properties: IndexMap<String, PropertyNode>,
    /// Schemas merged into this one, in declaration order.
    pub all_of: Vec<SchemaId>,
    /// Whether the object accepts properties beyond the declared ones.
    pub additional_properties: bool,
    /// Whether the shape varies by discriminator.
    pub is_polymorphic: bool,
}

impl SchemaNode {
    /// Create a node of the given kind with no properties.
    pub fn new(name: impl Into<String>, kind: SchemaKind) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            kind,
            description: None,
            properties: IndexMap::new(),
            all_of: Vec::new(),
            additional_properties: false,
            is_polymorphic: false,
        }
    }

    /// Create an object node.
    pub fn object(name: impl Into<String>) -> Self {
        Self::new(name, SchemaKind::Object)
    }

    /// Add a property, keyed by its name.
    pub fn property(mut self, property: PropertyNode) -> Self {
        self.properties.insert(property.name.clone(), property);
        self
    }

    /// Merge another schema into this one.
    pub fn all_of(mut self, id: SchemaId) -> Self {
        self.all_of.push(id);
        self
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn additional_properties(mut self, allowed: bool) -> Self {
        self.additional_properties = allowed;
        self
    }

    pub fn polymorphic(mut self) -> Self {
        self.is_polymorphic = true;
        self
    }

    /// Namespace-qualified name (e.g., "Contoso.Garage.Car").
    pub fn full_name(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{}.{}", ns, self.name),
            None => self.name.clone(),
        }
    }
}

/// A named property of an object schema.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyNode {
    /// Declared property name.
    pub name: String,
    /// Schema of the property value.
    pub schema: SchemaId,
    /// Read-only properties are never projected.
    pub read_only: bool,
    /// Required properties become mandatory parameters.
    pub required: bool,
    /// Description used as help text.
    pub description: Option<String>,
}

impl PropertyNode {
    pub fn new(name: impl Into<String>, schema: SchemaId) -> Self {
        Self {
            name: name.into(),
            schema,
            read_only: false,
            required: false,
            description: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Arena of schema nodes plus the index of named models.
#[derive(Debug, Clone, Default)]
pub struct SchemaGraph {
    nodes: Vec<SchemaNode>,
    models: IndexMap<String, SchemaId>,
}

impl SchemaGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an anonymous node.
    pub fn add(&mut self, node: SchemaNode) -> SchemaId {
        let id = SchemaId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Add a node and register it as a named model.
    ///
    /// A model registered twice under the same name keeps its first id.
    pub fn add_model(&mut self, node: SchemaNode) -> SchemaId {
        if let Some(id) = self.models.get(&node.name) {
            return *id;
        }
        let name = node.name.clone();
        let id = self.add(node);
        self.models.insert(name, id);
        id
    }

    /// Get a node by id.
    pub fn get(&self, id: SchemaId) -> Option<&SchemaNode> {
        self.nodes.get(id.0)
    }

    /// Get a mutable node by id (used while linking a graph).
    pub fn get_mut(&mut self, id: SchemaId) -> Option<&mut SchemaNode> {
        self.nodes.get_mut(id.0)
    }

    /// Look up a named model.
    pub fn model(&self, name: &str) -> Option<SchemaId> {
        self.models.get(name).copied()
    }

    /// Named models in registration order.
    pub fn models(&self) -> impl Iterator<Item = (&str, SchemaId)> {
        self.models.iter().map(|(name, id)| (name.as_str(), *id))
    }

    /// Number of nodes, named or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Index<SchemaId> for SchemaGraph {
    type Output = SchemaNode;

    /// Ids are only minted by the graph itself, so indexing with one of them
    /// cannot go out of bounds.
    fn index(&self, id: SchemaId) -> &SchemaNode {
        &self.nodes[id.0]
    }
}
