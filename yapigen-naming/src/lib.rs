//! Naming conventions for TypeScript declarations generated from YAPI.
//!
//! Derives interface identifiers, request/response/query type names, and
//! dotted declaration paths from [`ApiDescriptor`]s, plus the project
//! namespace read from `package.json`.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod names;
mod naming;
mod project;

pub use config::{ConfigRoot, ProjectConfig};
pub use error::{Error, Result};
pub use names::ApiNames;
pub use naming::{
    DeclarationGroup, TypeKind, body_path, declaration_path, interface_name, namespace,
    path_name, path_to_hump, query_name, query_path, request_name, response_name, response_path,
    type_name,
};
pub use project::project_name;
pub use yapigen_core::{ApiDescriptor, Hump};
