//! Parameter projection for the objcmd generator.
//!
//! Turns each selected model of a [`SchemaGraph`](objcmd_ir::SchemaGraph)
//! into a flat, ordered list of command parameters.
//!
//! # Module Organization
//!
//! - [`adapt`] / [`declared_type`] - leaf representation and binding choice
//! - [`NameAllocator`] / [`Scope`] - per-command parameter name uniqueness
//! - [`Projector`] - the recursive schema walk (composition, inlining, leaves)
//! - [`ParameterSink`] - consumers of projected commands ([`JsonSink`], [`CollectingSink`])
//! - [`binding`] - reference binder that applies values the way generated code does
//! - [`pipeline`] - validate → project → analyze orchestration with diagnostics

mod adapter;
pub mod binding;
mod config;
mod names;
pub mod pipeline;
mod projector;
mod sink;
mod stats;
mod target;

pub use adapter::{adapt, declared_type, value_type};
pub use config::ProjectionConfig;
pub use names::{NameAllocator, ProjectionWarning, Scope};
pub use projector::{HELP_MESSAGE_MISSING, ProjectionError, Projector};
pub use sink::{CollectingSink, JsonSink, ParameterSink, render_json};
pub use stats::ProjectionStats;
pub use target::command_target;
