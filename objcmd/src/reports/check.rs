//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from manifest and schema validation.
#[derive(Debug)]
pub struct CheckReport {
    pub config_path: PathBuf,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
    /// Present when every phase succeeded.
    pub summary: Option<CheckSummary>,
}

/// What a successful check would project.
#[derive(Debug)]
pub struct CheckSummary {
    pub project: String,
    pub commands: usize,
    pub parameters: usize,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.warning(&format!("error: {}", error));
        }

        for warning in &self.warnings {
            out.warning(&format!("warning: {}", warning));
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        if let Some(summary) = &self.summary {
            out.newline();
            out.preformatted(&format!("  {}", summary.project));
            out.preformatted(&format!(
                "  {} command{}, {} parameter{}",
                summary.commands,
                plural(summary.commands),
                summary.parameters,
                plural(summary.parameters)
            ));
        }
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::RecordingOutput;

    #[test]
    fn test_render_valid() {
        let report = CheckReport {
            config_path: PathBuf::from("objcmd.toml"),
            errors: Vec::new(),
            warnings: vec!["no object model is selected\n  --> models".into()],
            infos: Vec::new(),
            summary: Some(CheckSummary {
                project: "garage".into(),
                commands: 1,
                parameters: 3,
            }),
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);
        insta::assert_snapshot!(out.text(), @r"
        warning: no object model is selected
          --> models

        ✓ objcmd.toml is valid

          garage
          1 command, 3 parameters
        ");
    }

    #[test]
    fn test_render_invalid() {
        let report = CheckReport {
            config_path: PathBuf::from("objcmd.toml"),
            errors: vec!["model 'Truck' is not defined by the schema".into()],
            warnings: Vec::new(),
            infos: Vec::new(),
            summary: None,
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert!(!report.is_valid());
        assert_eq!(
            out.lines,
            ["error: model 'Truck' is not defined by the schema", ""]
        );
    }
}
