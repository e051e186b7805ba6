use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};

use super::open_project;
use crate::ops::{self, NewOptions};

#[derive(Args)]
pub struct NewCommand {
    /// Model to build an instance of
    pub model: String,

    /// Path to objcmd.toml (defaults to ./objcmd.toml)
    #[arg(short, long, default_value = "objcmd.toml")]
    pub config: PathBuf,

    /// Parameter value as NAME=VALUE; a bare NAME turns a flag on
    #[arg(long = "set", value_name = "NAME[=VALUE]")]
    pub values: Vec<String>,

    /// Directory file paths are resolved from (defaults to the current directory)
    #[arg(long)]
    pub base: Option<PathBuf>,
}

impl NewCommand {
    pub fn run(&self) -> Result<()> {
        let (objcmd_toml, graph) = open_project(&self.config);
        let base = self.base.clone().unwrap_or_else(|| PathBuf::from("."));

        let instance = ops::new_instance(
            objcmd_toml.manifest(),
            graph,
            &NewOptions {
                model: &self.model,
                values: &self.values,
                base: &base,
            },
        )?;
        let json = serde_json::to_string_pretty(&instance).wrap_err("failed to render instance")?;
        println!("{}", json);
        Ok(())
    }
}
