//! Names command report data structures.

use yapigen_naming::{ApiDescriptor, ApiNames};

use super::output::{Output, Report};

/// Report data for one interface.
#[derive(Debug)]
pub struct NamesReport {
    /// The interface the names were derived from.
    pub api: ApiDescriptor,
    /// Derived names.
    pub names: ApiNames,
}

impl Report for NamesReport {
    fn render(&self, out: &mut dyn Output) {
        out.heading(&self.names.interface);
        out.line(&format!(
            "{} {}",
            self.api.method.to_uppercase(),
            self.api.path
        ));
        if let Some(title) = &self.api.title {
            out.line(title);
        }
        out.newline();

        out.heading("Types");
        out.entry("Request", &self.names.request);
        out.entry("Response", &self.names.response);
        out.entry("Query", &self.names.query);
        out.newline();

        out.heading("Declarations");
        out.entry("Namespace", &self.names.namespace);
        out.entry("Query", &self.names.query_path);
        out.entry("Body", &self.names.body_path);
        out.entry("Response", &self.names.response_path);
    }
}
