//! Integration tests for reading the project name from package.json.

use std::path::Path;

use tempfile::TempDir;
use yapigen_naming::{Error, ProjectConfig, project_name};

fn write_package_json(dir: &Path, content: &str) {
    std::fs::write(dir.join("package.json"), content).expect("Failed to write package.json");
}

#[test]
fn test_project_name_is_camel_case() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_package_json(
        temp_dir.path(),
        r#"{ "name": "my-shop_admin", "version": "1.0.0", "private": true }"#,
    );

    assert_eq!(project_name(temp_dir.path()).unwrap(), "myShopAdmin");
}

#[test]
fn test_project_name_missing_package_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let err = project_name(temp_dir.path()).unwrap_err();
    assert!(matches!(*err, Error::MissingPackageJson { .. }));

    let message = err.to_string();
    assert!(message.starts_with("当前目录下没有package.json文件"));
    assert!(message.contains(&temp_dir.path().display().to_string()));
}

#[test]
fn test_project_name_malformed_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_package_json(temp_dir.path(), "{ \"name\": ");

    let err = project_name(temp_dir.path()).unwrap_err();
    assert!(matches!(*err, Error::Parse { .. }));
}

#[test]
fn test_project_name_without_name_field() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_package_json(temp_dir.path(), r#"{ "version": "1.0.0" }"#);

    let err = project_name(temp_dir.path()).unwrap_err();
    match *err {
        Error::Parse { source, .. } => {
            assert!(source.to_string().contains("missing field `name`"))
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_project_config_derives_namespace() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_package_json(temp_dir.path(), r#"{ "name": "my-project" }"#);

    let config = ProjectConfig::new(temp_dir.path());
    assert_eq!(project_name(&config).unwrap(), "myProject");
    assert_eq!(config.namespace().unwrap(), "MyProject");
}

#[test]
fn test_project_config_explicit_namespace_wins() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_package_json(temp_dir.path(), r#"{ "name": "my-project" }"#);

    let config = ProjectConfig::new(temp_dir.path()).with_namespace("Admin");
    assert_eq!(config.namespace().unwrap(), "Admin");
}
