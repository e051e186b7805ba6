use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::open_project;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ExplainCommand {
    /// Model to explain
    pub model: String,

    /// Path to objcmd.toml (defaults to ./objcmd.toml)
    #[arg(short, long, default_value = "objcmd.toml")]
    pub config: PathBuf,
}

impl ExplainCommand {
    pub fn run(&self) -> Result<()> {
        let (objcmd_toml, graph) = open_project(&self.config);
        let report = ops::explain(objcmd_toml.manifest(), graph, &self.model)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
