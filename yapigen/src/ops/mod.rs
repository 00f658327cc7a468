//! Operations layer - business logic separated from CLI presentation.
//!
//! Each operation returns a report that commands render.

mod names;
mod project;

pub use names::{load_api, names};
pub use project::project;
