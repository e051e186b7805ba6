//! Intermediate representation types for the objcmd generator.
//!
//! This crate provides the data model shared by the whole pipeline: the
//! resolved schema graph the projector reads, and the parameter descriptors
//! it hands to a sink.
//!
//! # Architecture
//!
//! ```text
//! models.json → objcmd-schema (loading) → SchemaGraph → projector → ProjectedCommand → sink
//! ```
//!
//! The IR types are designed to be:
//! - Language-agnostic (no target-language spelling of types or statements)
//! - Immutable once built (the projector only reads the graph)
//! - Serializable on the output side, so sinks can live out of process

mod accessor;
mod command;
mod parameter;
mod schema;

pub use accessor::{AccessStep, AccessorPath, EnsureInitialized};
pub use command::{CommandTarget, ProjectedCommand};
pub use parameter::{
    BindingTemplate, DeclaredType, FILE_AMBIGUOUS_MESSAGE, FILE_NOT_FOUND_MESSAGE,
    ParameterDescriptor, RepresentationKind,
};
pub use schema::{PropertyNode, SchemaGraph, SchemaId, SchemaKind, SchemaNode};
