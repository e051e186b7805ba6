//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - lints the manifest against the schema graph
//! - [`ProjectPhase`] - projects each selected model into a command
//! - [`AnalyzePhase`] - computes [`ProjectionStats`](crate::ProjectionStats)

mod analyze;
mod project;
mod validate;

pub use analyze::AnalyzePhase;
pub use project::ProjectPhase;
pub use validate::{
    EmptySelectionLint, Lint, LintInfo, MissingDescriptionLint, UnknownModelLint, ValidatePhase,
};
