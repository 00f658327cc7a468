mod names;
mod project;

use clap::{Parser, Subcommand};
use eyre::Result;
use names::NamesCommand;
use project::ProjectCommand;
use tracing::Level;

/// Extension trait for exiting on naming errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for yapigen_naming::Result<T> {
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

#[derive(Parser)]
#[command(name = "yapigen")]
#[command(version)]
#[command(about = "Inspect the TypeScript names derived from YAPI interfaces")]
pub(crate) struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn init_tracing(&self) {
        let level = if self.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        };
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .init();
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Names(cmd) => cmd.run(),
            Commands::Project(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show the names derived for one interface
    Names(NamesCommand),

    /// Show the project name and namespace read from package.json
    Project(ProjectCommand),
}
