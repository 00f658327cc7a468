//! Configuration inputs for project-level naming.

use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};

use crate::{Result, namespace, project::project_name};

/// Source of the directory that holds the project's `package.json`.
pub trait ConfigRoot {
    fn root_path(&self) -> Cow<'_, Path>;
}

impl ConfigRoot for Path {
    fn root_path(&self) -> Cow<'_, Path> {
        Cow::Borrowed(self)
    }
}

impl ConfigRoot for PathBuf {
    fn root_path(&self) -> Cow<'_, Path> {
        Cow::Borrowed(self.as_path())
    }
}

impl<T: ConfigRoot + ?Sized> ConfigRoot for &T {
    fn root_path(&self) -> Cow<'_, Path> {
        (**self).root_path()
    }
}

/// Project-level naming configuration.
#[derive(Debug, Clone, Default)]
pub struct ProjectConfig {
    /// Directory containing `package.json`.
    pub root: PathBuf,
    /// Explicit namespace, overriding the one derived from `package.json`.
    pub namespace: Option<String>,
}

impl ProjectConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            namespace: None,
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Resolve the declaration namespace.
    ///
    /// Reads `package.json` only when no namespace was set explicitly.
    pub fn namespace(&self) -> Result<String> {
        match &self.namespace {
            Some(ns) => Ok(ns.clone()),
            None => Ok(namespace(&project_name(self)?)),
        }
    }
}

impl ConfigRoot for ProjectConfig {
    fn root_path(&self) -> Cow<'_, Path> {
        Cow::Borrowed(&self.root)
    }
}
