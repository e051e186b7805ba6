//! Project command report data structures.

use std::path::PathBuf;

use objcmd_codegen::ProjectionStats;

use super::output::{Output, Report};

/// Report data from a projection run.
#[derive(Debug)]
pub struct ProjectReport {
    pub project: String,
    pub warnings: Vec<String>,
    pub stats: ProjectionStats,
    pub result: ProjectResult,
}

/// What happened to the parameter document.
#[derive(Debug)]
pub enum ProjectResult {
    /// Dry run: the document is printed instead of written.
    Preview { content: String },
    Written { path: PathBuf, changed: bool },
}

impl Report for ProjectReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(&format!("warning: {}", warning));
        }

        match &self.result {
            ProjectResult::Preview { content } => {
                // Trailing newline is already part of the document
                out.preformatted(content.trim_end());
            }
            ProjectResult::Written { path, changed } => {
                out.preformatted(&self.project);
                out.key_value_indented("commands", &self.stats.commands.to_string());
                out.key_value_indented("parameters", &self.stats.parameters.to_string());
                out.key_value_indented(
                    "flags / file paths",
                    &format!("{} / {}", self.stats.flags, self.stats.file_paths),
                );
                out.newline();
                if *changed {
                    out.preformatted(&format!("Wrote {}", path.display()));
                } else {
                    out.preformatted(&format!("{} is up to date", path.display()));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::RecordingOutput;

    #[test]
    fn test_render_written() {
        let report = ProjectReport {
            project: "garage".into(),
            warnings: vec!["schema 'Vehicle' is polymorphic (at models.Car)".into()],
            stats: ProjectionStats {
                commands: 2,
                parameters: 5,
                plain: 3,
                flags: 1,
                file_paths: 1,
                mandatory: 1,
                max_depth: 1,
            },
            result: ProjectResult::Written {
                path: PathBuf::from("objcmd.params.json"),
                changed: false,
            },
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);
        insta::assert_snapshot!(out.text(), @r"
        warning: schema 'Vehicle' is polymorphic (at models.Car)
        garage
             commands: 2
             parameters: 5
             flags / file paths: 1 / 1

        objcmd.params.json is up to date
        ");
    }
}
