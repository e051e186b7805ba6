//! Projection pipeline.
//!
//! A [`Pipeline`] runs the built-in phases (validate → project → analyze)
//! over a manifest and a loaded schema graph, followed by any user phases.
//! Every phase reads and extends one [`CompilationContext`], and plugins
//! receive hooks before and after each phase.
//!
//! # Example
//!
//! ```ignore
//! use objcmd_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new().run(manifest, graph)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("{}", diag);
//! }
//! let commands = ctx.commands();
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;

pub use context::{CompilationContext, selected_models};
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use plugin::Plugin;
pub use runner::Pipeline;
