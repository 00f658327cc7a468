use serde::Serialize;
use yapigen_core::ApiDescriptor;

use crate::naming::{
    body_path, interface_name, query_name, query_path, request_name, response_name, response_path,
};

/// Every name derived from one interface under one namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiNames {
    pub namespace: String,
    pub interface: String,
    pub request: String,
    pub response: String,
    pub query: String,
    pub query_path: String,
    pub body_path: String,
    pub response_path: String,
}

impl ApiNames {
    pub fn new(namespace: &str, api: &ApiDescriptor) -> Self {
        Self {
            namespace: namespace.to_string(),
            interface: interface_name(api),
            request: request_name(api),
            response: response_name(api),
            query: query_name(api),
            query_path: query_path(namespace, api),
            body_path: body_path(namespace, api),
            response_path: response_path(namespace, api),
        }
    }
}
