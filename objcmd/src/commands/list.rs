use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::open_project;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    /// Path to objcmd.toml (defaults to ./objcmd.toml)
    #[arg(short, long, default_value = "objcmd.toml")]
    pub config: PathBuf,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let (objcmd_toml, graph) = open_project(&self.config);
        let report = ops::list(objcmd_toml.manifest(), graph)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
