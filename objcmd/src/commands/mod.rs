mod check;
mod completions;
mod explain;
mod list;
mod new;
mod project;

use std::path::Path;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use explain::ExplainCommand;
use list::ListCommand;
use new::NewCommand;
use objcmd_ir::SchemaGraph;
use objcmd_manifest::ObjcmdToml;
use project::ProjectCommand;

/// Extension trait for exiting on manifest and schema errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for objcmd_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for objcmd_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Open objcmd.toml and the schema document it points at.
pub(crate) fn open_project(config: &Path) -> (ObjcmdToml, SchemaGraph) {
    let objcmd_toml = ObjcmdToml::open(config).unwrap_or_exit();
    let graph = objcmd_schema::parse_file(objcmd_toml.schema_path()).unwrap_or_exit();
    (objcmd_toml, graph)
}

#[derive(Parser)]
#[command(name = "objcmd")]
#[command(version)]
#[command(about = "Generate object construction commands from a schema graph")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Check(cmd) => cmd.run(),
            Commands::Project(cmd) => cmd.run(),
            Commands::Explain(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::New(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate objcmd.toml and the schema without writing anything
    Check(CheckCommand),

    /// Project selected models and write the parameter document
    Project(ProjectCommand),

    /// Show how one model is projected, parameter by parameter
    Explain(ExplainCommand),

    /// List models with their commands and parameter counts
    List(ListCommand),

    /// Build an instance of a model from parameter values
    New(NewCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
