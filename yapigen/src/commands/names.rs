use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result, bail};
use yapigen_naming::{ApiDescriptor, ProjectConfig};

use super::UnwrapOrExit;
use crate::{ops, reports::render_to_string};

#[derive(Args)]
pub struct NamesCommand {
    /// Interface path template, e.g. /user/{id}
    #[arg(short, long, requires = "method", conflicts_with = "api")]
    pub path: Option<String>,

    /// HTTP method of the interface
    #[arg(short, long, requires = "path", conflicts_with = "api")]
    pub method: Option<String>,

    /// Read the interface from a YAPI JSON record instead
    #[arg(short, long)]
    pub api: Option<PathBuf>,

    /// Declaration namespace (defaults to the package.json name in PascalCase)
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Directory containing package.json
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Print the names as JSON
    #[arg(long)]
    pub json: bool,
}

impl NamesCommand {
    pub fn run(&self) -> Result<()> {
        let api = self.descriptor()?;

        let mut config = ProjectConfig::new(&self.root);
        config.namespace = self.namespace.clone();
        let namespace = config.namespace().unwrap_or_exit();

        let report = ops::names(api, &namespace);
        if self.json {
            let json = serde_json::to_string_pretty(&report.names)
                .wrap_err("failed to serialize names")?;
            println!("{}", json);
        } else {
            print!("{}", render_to_string(&report));
        }

        Ok(())
    }

    fn descriptor(&self) -> Result<ApiDescriptor> {
        match (&self.api, &self.path, &self.method) {
            (Some(file), _, _) => ops::load_api(file),
            (None, Some(path), Some(method)) => Ok(ApiDescriptor::new(path, method)),
            _ => bail!("pass --path and --method, or --api <FILE>"),
        }
    }
}
