use serde::Deserialize;

/// One HTTP endpoint as described by a YAPI interface record.
///
/// Only `path` and `method` drive name derivation. The remaining fields are
/// carried along for reporting and are optional in the source JSON; any other
/// field in the record is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiDescriptor {
    /// URL path template, e.g. `/user/{id}/profile`.
    pub path: String,
    /// HTTP verb as stored in YAPI, in any case.
    pub method: String,
    #[serde(rename = "_id", default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub project_id: Option<u64>,
    #[serde(default)]
    pub catid: Option<u64>,
}

impl ApiDescriptor {
    pub fn new(path: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: method.into(),
            id: None,
            title: None,
            project_id: None,
            catid: None,
        }
    }

    /// Set the human readable title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let api = ApiDescriptor::new("/user/{id}", "GET");
        assert_eq!(api.path, "/user/{id}");
        assert_eq!(api.method, "GET");
        assert!(api.id.is_none());
        assert!(api.title.is_none());
    }

    #[test]
    fn test_with_title() {
        let api = ApiDescriptor::new("/user", "POST").with_title("Create user");
        assert_eq!(api.title.as_deref(), Some("Create user"));
    }

    #[test]
    fn test_deserialize_yapi_record() {
        let json = r#"{
            "_id": 1024,
            "title": "Get user profile",
            "path": "/user/{id}/profile",
            "method": "GET",
            "project_id": 11,
            "catid": 42,
            "req_query": [],
            "res_body_type": "json"
        }"#;
        let api: ApiDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(api.path, "/user/{id}/profile");
        assert_eq!(api.method, "GET");
        assert_eq!(api.id, Some(1024));
        assert_eq!(api.title.as_deref(), Some("Get user profile"));
        assert_eq!(api.project_id, Some(11));
        assert_eq!(api.catid, Some(42));
    }

    #[test]
    fn test_deserialize_minimal() {
        let api: ApiDescriptor =
            serde_json::from_str(r#"{"path": "/a/b", "method": "post"}"#).unwrap();
        assert_eq!(api, ApiDescriptor::new("/a/b", "post"));
    }

    #[test]
    fn test_deserialize_missing_method() {
        let err = serde_json::from_str::<ApiDescriptor>(r#"{"path": "/a"}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `method`"));
    }
}
