//! Naming conventions for declarations generated from YAPI interfaces.

use std::fmt;

use yapigen_core::{ApiDescriptor, Hump, capitalize, underline_to_hump};

/// Kind of declaration type derived from an interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// Request body type (e.g. `IPostUserRequest`).
    Request,
    /// Response body type (e.g. `IGetUserResponse`).
    Response,
    /// Query string type (e.g. `IGetUserQuery`).
    Query,
}

impl TypeKind {
    /// Suffix appended to the type name.
    pub fn suffix(self) -> &'static str {
        match self {
            TypeKind::Request => "Request",
            TypeKind::Response => "Response",
            TypeKind::Query => "Query",
        }
    }

    /// Declaration group the type lives in.
    ///
    /// Query types are grouped with request bodies; only responses get their own group.
    pub fn group(self) -> DeclarationGroup {
        match self {
            TypeKind::Request | TypeKind::Query => DeclarationGroup::Request,
            TypeKind::Response => DeclarationGroup::Response,
        }
    }
}

/// Second segment of a dotted declaration path (`<ns>.<group>.<type>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationGroup {
    Request,
    Response,
}

impl fmt::Display for DeclarationGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclarationGroup::Request => write!(f, "Request"),
            DeclarationGroup::Response => write!(f, "Response"),
        }
    }
}

/// Turn an interface path into an identifier.
///
/// Parameter braces are dropped (keeping the parameter name) and every `/`
/// acts as a separator, so `/user/{id}/profile` becomes `UserIdProfile`.
pub fn path_to_hump(api: &ApiDescriptor, hump: Hump) -> String {
    let name: String = api
        .path
        .chars()
        .filter(|c| !matches!(c, '{' | '}'))
        .map(|c| if c == '/' { '_' } else { c })
        .collect();
    underline_to_hump(&name, hump)
}

/// PascalCase identifier for the interface path.
pub fn path_name(api: &ApiDescriptor) -> String {
    path_to_hump(api, Hump::Pascal)
}

/// Build `I<Method><Path><Suffix>` for the given kind.
pub fn type_name(api: &ApiDescriptor, kind: TypeKind) -> String {
    format!(
        "I{}{}{}",
        capitalize(&api.method),
        path_name(api),
        kind.suffix()
    )
}

pub fn response_name(api: &ApiDescriptor) -> String {
    type_name(api, TypeKind::Response)
}

pub fn request_name(api: &ApiDescriptor) -> String {
    type_name(api, TypeKind::Request)
}

pub fn query_name(api: &ApiDescriptor) -> String {
    type_name(api, TypeKind::Query)
}

/// PascalCase namespace for a project name (e.g. "my-project" -> "MyProject").
pub fn namespace(project_name: &str) -> String {
    underline_to_hump(project_name, Hump::Pascal)
}

/// Dotted declaration path for a type, e.g. `Shop.Request.IGetUserQuery`.
pub fn declaration_path(namespace: &str, api: &ApiDescriptor, kind: TypeKind) -> String {
    format!("{}.{}.{}", namespace, kind.group(), type_name(api, kind))
}

pub fn query_path(namespace: &str, api: &ApiDescriptor) -> String {
    declaration_path(namespace, api, TypeKind::Query)
}

pub fn body_path(namespace: &str, api: &ApiDescriptor) -> String {
    declaration_path(namespace, api, TypeKind::Request)
}

pub fn response_path(namespace: &str, api: &ApiDescriptor) -> String {
    declaration_path(namespace, api, TypeKind::Response)
}

/// Function identifier for the interface: lowercase method then PascalCase path.
///
/// Unlike the type names this has no `I` prefix and the method is not capitalized.
pub fn interface_name(api: &ApiDescriptor) -> String {
    format!("{}{}", api.method.to_lowercase(), path_name(api))
}
