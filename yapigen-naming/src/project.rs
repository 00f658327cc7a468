//! Project name resolution from `package.json`.

use serde::Deserialize;
use yapigen_core::to_camel_case;

use crate::{ConfigRoot, Error, Result};

const PACKAGE_JSON: &str = "package.json";

#[derive(Debug, Deserialize)]
struct PackageJson {
    name: String,
}

/// Read the project name from `<root>/package.json` as camelCase.
///
/// Fails with [`Error::MissingPackageJson`] when the file does not exist and
/// with [`Error::Parse`] when it is not valid JSON or has no string `name`.
pub fn project_name<C: ConfigRoot + ?Sized>(config: &C) -> Result<String> {
    let root = config.root_path();
    let path = root.join(PACKAGE_JSON);

    if !path.exists() {
        return Err(Box::new(Error::MissingPackageJson {
            root: root.into_owned(),
        }));
    }

    tracing::debug!(path = %path.display(), "reading project name");
    let content = std::fs::read_to_string(&path).map_err(|e| {
        Box::new(Error::Io {
            path: path.clone(),
            source: e,
        })
    })?;
    let package: PackageJson = serde_json::from_str(&content)
        .map_err(|e| Error::parse(e, &content, &path.display().to_string()))?;

    let name = to_camel_case(&package.name);
    tracing::debug!(package = %package.name, %name, "resolved project name");
    Ok(name)
}
