use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use yapigen_naming::ProjectConfig;

use super::UnwrapOrExit;
use crate::{ops, reports::render_to_string};

#[derive(Args)]
pub struct ProjectCommand {
    /// Directory containing package.json
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Override the derived namespace
    #[arg(short, long)]
    pub namespace: Option<String>,
}

impl ProjectCommand {
    pub fn run(&self) -> Result<()> {
        let mut config = ProjectConfig::new(&self.root);
        config.namespace = self.namespace.clone();

        let report = ops::project(&config).unwrap_or_exit();
        print!("{}", render_to_string(&report));

        Ok(())
    }
}
