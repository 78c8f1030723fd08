use digiurban_domain::config::{LifecycleConfig, LoggingConfig, PlatformConfig, RegistryConfig};
use digiurban_domain::{Department, DepartmentSet};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let registry = RegistryConfig::default();
    assert_eq!(registry.departments, DepartmentSet::ALL);
    assert!(registry.require_complete);

    assert!(LifecycleConfig::default().revalidate_on_update);

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.console);
    assert!(logging.directory.is_none());
}

#[test]
fn platform_config_deserializes() {
    let raw = json!({
        "registry": { "departments": ["SAUDE", "EDUCACAO"], "require_complete": false },
        "lifecycle": { "revalidate_on_update": false },
        "logging": { "level": "debug", "json": true, "directory": "/tmp/logs" }
    });

    let cfg: PlatformConfig = serde_json::from_value(raw).expect("config deserialize");
    assert!(cfg.registry.departments.includes(Department::Saude));
    assert!(cfg.registry.departments.includes(Department::Educacao));
    assert!(!cfg.registry.departments.includes(Department::Habitacao));
    assert!(!cfg.registry.require_complete);
    assert!(!cfg.lifecycle.revalidate_on_update);
    assert_eq!(cfg.logging.level, "debug");
    assert_eq!(cfg.logging.directory, Some(std::path::PathBuf::from("/tmp/logs")));
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let cfg: PlatformConfig = serde_json::from_value(json!({})).expect("config deserialize");
    assert_eq!(cfg.registry.departments, DepartmentSet::ALL);
    assert!(cfg.lifecycle.revalidate_on_update);
}

#[test]
fn deref_mut_copies_on_write() {
    let original = PlatformConfig::default();
    let mut tuned = original.clone();
    tuned.lifecycle.revalidate_on_update = false;

    assert!(original.lifecycle.revalidate_on_update);
    assert!(!tuned.lifecycle.revalidate_on_update);
}
