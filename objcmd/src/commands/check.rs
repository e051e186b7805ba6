use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::open_project;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to objcmd.toml (defaults to ./objcmd.toml)
    #[arg(short, long, default_value = "objcmd.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let (objcmd_toml, graph) = open_project(&self.config);
        let report = ops::check(objcmd_toml.manifest(), graph, &self.config);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
