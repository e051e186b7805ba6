//! Report data structures for commands.
//!
//! Operations build reports, then commands render them to an [`Output`].

mod check;
mod explain;
mod list;
mod output;
mod project;

pub use check::{CheckReport, CheckSummary};
pub use explain::{ExplainReport, ParameterInfo};
pub use list::{ListEntry, ListReport};
#[cfg(test)]
pub use output::RecordingOutput;
pub use output::{Output, Report, TerminalOutput};
pub use project::{ProjectReport, ProjectResult};
