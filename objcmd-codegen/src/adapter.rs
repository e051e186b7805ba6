//! Type adapter: how a leaf schema is presented and bound.
//!
//! Booleans become toggles and binary payloads become file paths, since
//! neither is usable directly at the invocation boundary. Everything else is
//! assigned as is.

use objcmd_ir::{
    BindingTemplate, DeclaredType, RepresentationKind, SchemaGraph, SchemaId, SchemaKind,
    SchemaNode,
};

/// Choose the representation and binding for a leaf of this schema.
///
/// Pure: looks only at the schema kind.
pub fn adapt(schema: &SchemaNode) -> (RepresentationKind, BindingTemplate) {
    match schema.kind {
        SchemaKind::Boolean => (RepresentationKind::Flag, BindingTemplate::SwitchToBool),
        SchemaKind::Binary => (
            RepresentationKind::FilePath,
            BindingTemplate::resolve_single_file(),
        ),
        _ => (RepresentationKind::Plain, BindingTemplate::Assign),
    }
}

/// Type of the parameter projected from `id`, after the adapter's rewrites.
pub fn declared_type(graph: &SchemaGraph, id: SchemaId) -> DeclaredType {
    match graph[id].kind {
        SchemaKind::Boolean => DeclaredType::Switch,
        SchemaKind::Binary => DeclaredType::Path,
        _ => value_type(graph, id),
    }
}

/// Type of a value of schema `id`, without rewrites.
///
/// Used for composite element types, which are never adapted.
pub fn value_type(graph: &SchemaGraph, id: SchemaId) -> DeclaredType {
    let node = &graph[id];
    match node.kind {
        SchemaKind::Scalar(scalar) => DeclaredType::Scalar(scalar),
        SchemaKind::Boolean => DeclaredType::Boolean,
        SchemaKind::Binary => DeclaredType::Binary,
        SchemaKind::Object => DeclaredType::Model(node.full_name()),
        SchemaKind::Array(item) => DeclaredType::Array(Box::new(value_type(graph, item))),
        SchemaKind::Map(value) => DeclaredType::Map(Box::new(value_type(graph, value))),
    }
}
