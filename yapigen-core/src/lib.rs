//! Core utilities and types for yapigen.
//!
//! This crate provides the case conversion primitives and the API descriptor
//! type shared by the naming crate and the CLI.

mod api;
mod utils;

// API metadata
pub use api::ApiDescriptor;
// String utilities
pub use utils::{Hump, capitalize, to_camel_case, to_pascal_case, underline_to_hump};
