//! Project operation - project name and namespace.

use yapigen_naming::{ConfigRoot, ProjectConfig, Result, namespace, project_name};

use crate::reports::ProjectReport;

/// Execute the project operation.
///
/// The namespace follows `config.namespace` when set, otherwise the package name.
pub fn project(config: &ProjectConfig) -> Result<ProjectReport> {
    let name = project_name(config)?;
    let namespace = match &config.namespace {
        Some(ns) => ns.clone(),
        None => namespace(&name),
    };
    let root = config.root_path().into_owned();
    Ok(ProjectReport {
        root: std::fs::canonicalize(&root).unwrap_or(root),
        name,
        namespace,
    })
}
