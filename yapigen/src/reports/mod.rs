//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod names;
mod output;
mod project;

pub use names::NamesReport;
pub use output::render_to_string;
pub use project::ProjectReport;
