//! Names operation - derive every name for one interface.

use std::path::Path;

use eyre::{Context, Result};
use serde::Deserialize;
use yapigen_naming::{ApiDescriptor, ApiNames};

use crate::reports::NamesReport;

/// A YAPI interface record, either bare or wrapped in the API response envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum ApiRecord {
    Envelope { data: ApiDescriptor },
    Bare(ApiDescriptor),
}

/// Load an interface from a YAPI JSON export.
pub fn load_api(path: &Path) -> Result<ApiDescriptor> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read '{}'", path.display()))?;
    let record: ApiRecord = serde_json::from_str(&content)
        .wrap_err_with(|| format!("'{}' is not a YAPI interface record", path.display()))?;

    let api = match record {
        ApiRecord::Envelope { data } => data,
        ApiRecord::Bare(api) => api,
    };
    tracing::debug!(path = %api.path, method = %api.method, "loaded interface");
    Ok(api)
}

/// Execute the names operation.
pub fn names(api: ApiDescriptor, namespace: &str) -> NamesReport {
    let names = ApiNames::new(namespace, &api);
    NamesReport { api, names }
}
