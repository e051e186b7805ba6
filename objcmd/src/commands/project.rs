use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::open_project;
use crate::{
    ops::{self, ProjectOptions},
    reports::{Report, TerminalOutput},
};

/// Default parameter document name, next to objcmd.toml.
const DEFAULT_OUTPUT: &str = "objcmd.params.json";

#[derive(Args)]
pub struct ProjectCommand {
    /// Path to objcmd.toml (defaults to ./objcmd.toml)
    #[arg(short, long, default_value = "objcmd.toml")]
    pub config: PathBuf,

    /// Where to write the parameter document
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the document instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Project only these models, ignoring the manifest's selection
    #[arg(long = "model", value_name = "NAME")]
    pub models: Vec<String>,
}

impl ProjectCommand {
    pub fn run(&self) -> Result<()> {
        let (objcmd_toml, graph) = open_project(&self.config);
        let output = self
            .output
            .clone()
            .unwrap_or_else(|| objcmd_toml.base_dir().join(DEFAULT_OUTPUT));

        let report = ops::project(
            objcmd_toml.manifest(),
            graph,
            &ProjectOptions {
                output: &output,
                dry_run: self.dry_run,
                models: &self.models,
            },
        )?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
