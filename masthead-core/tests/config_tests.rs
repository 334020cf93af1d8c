//! Error-message and storage-layout integration tests for the config store
//! and module registry.

use assert_fs::prelude::*;
use masthead_core::{
    config::ConfigSource, ConfigError, ConfigStore, ModuleInfo, ModuleName, ModuleRegistry,
    Modules,
};
use predicates::prelude::*;

fn system() -> ModuleName {
    ModuleName::system()
}

// ---------------------------------------------------------------------------
// 1. Config store
// ---------------------------------------------------------------------------

#[test]
fn section_and_scalar_from_one_scope_file() {
    let root = assert_fs::TempDir::new().expect("tempdir");
    root.child("config/system.yaml")
        .write_str(
            "site:\n  sitename: Example\n  slogan: Just Testing\n  salt: s3cr3t\ngeneral:\n  locale: en\n",
        )
        .expect("write");

    let store = ConfigStore::open(root.path());
    let general = store.section(&system(), "general").expect("section");
    assert_eq!(general.get("locale").map(String::as_str), Some("en"));
    assert_eq!(
        store.scalar("slogan").expect("scalar"),
        Some("Just Testing".to_owned())
    );
}

#[test]
fn corrupt_scope_yaml_reports_path_and_context() {
    let root = assert_fs::TempDir::new().expect("tempdir");
    root.child("config/blog.yaml")
        .write_str(": : corrupt : yaml : !!!\n  - broken: [unclosed")
        .expect("write");

    let store = ConfigStore::open(root.path());
    let err = store
        .section(&ModuleName::from("blog"), "head_meta")
        .unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "got: {err}");
    let msg = err.to_string();
    assert!(
        predicate::str::contains("blog.yaml").eval(&msg),
        "must contain file path, got: {msg}"
    );
    let source_msg = match &err {
        ConfigError::Parse { source, .. } => source.to_string(),
        _ => unreachable!(),
    };
    assert!(!source_msg.is_empty(), "serde_yaml must provide error context");
}

#[test]
fn wrong_shape_yaml_is_parse_error() {
    let root = assert_fs::TempDir::new().expect("tempdir");
    root.child("config/system.yaml")
        .write_str("- this is a list, not a mapping\n")
        .expect("write");

    let store = ConfigStore::open(root.path());
    let err = store.section(&system(), "general").unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "got: {err}");
}

#[test]
fn absent_config_is_empty_not_an_error() {
    let root = assert_fs::TempDir::new().expect("tempdir");
    let store = ConfigStore::open(root.path());
    assert!(store.section(&system(), "general").expect("section").is_empty());
    assert_eq!(store.scalar("sitename").expect("scalar"), None);
}

// ---------------------------------------------------------------------------
// 2. Module registry
// ---------------------------------------------------------------------------

#[test]
fn registry_roundtrip_under_modules_dir() {
    let root = assert_fs::TempDir::new().expect("tempdir");
    let registry = ModuleRegistry::open(root.path());
    let mut info = ModuleInfo::new("blog", "Blog");
    info.version = Some("1.2.0".to_owned());
    registry.save(&info).expect("save");

    root.child("modules/blog.yaml")
        .assert(predicate::path::exists());
    let loaded = registry.read(&ModuleName::from("blog")).expect("read");
    assert_eq!(loaded.title, "Blog");
    assert_eq!(loaded.version.as_deref(), Some("1.2.0"));
}

#[test]
fn missing_module_error_names_the_path() {
    let root = assert_fs::TempDir::new().expect("tempdir");
    let registry = ModuleRegistry::open(root.path());
    let err = registry.read(&ModuleName::from("ghost")).unwrap_err();
    assert!(matches!(err, ConfigError::ModuleNotFound { .. }), "got: {err}");
    assert!(err.to_string().contains("module not found"));
    assert!(err.to_string().contains("ghost.yaml"));
}

#[test]
fn corrupt_module_record_is_parse_error() {
    let root = assert_fs::TempDir::new().expect("tempdir");
    root.child("modules/blog.yaml")
        .write_str("title: [not, a, string, record")
        .expect("write");

    let registry = ModuleRegistry::open(root.path());
    let err = registry.read(&ModuleName::from("blog")).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "got: {err}");
}
