//! Project command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data for a project root.
#[derive(Debug)]
pub struct ProjectReport {
    /// Directory containing package.json.
    pub root: PathBuf,
    /// camelCase project name.
    pub name: String,
    /// PascalCase declaration namespace.
    pub namespace: String,
}

impl Report for ProjectReport {
    fn render(&self, out: &mut dyn Output) {
        out.heading(&self.name);
        out.entry("Namespace", &self.namespace);
        out.entry("Root", &self.root.display().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::render_to_string;

    #[test]
    fn test_render() {
        let report = ProjectReport {
            root: PathBuf::from("/work/my-project"),
            name: "myProject".into(),
            namespace: "MyProject".into(),
        };

        insta::assert_snapshot!(render_to_string(&report), @r"
        myProject
        ─────────
        Namespace   MyProject
        Root        /work/my-project
        ");
    }
}
