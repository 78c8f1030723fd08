use digiurban_domain::config::PlatformConfig;
use digiurban_domain::{Department, DepartmentSet};
use digiurban_kernel::config::load_config;
use std::io::Write;

#[test]
fn loads_toml_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        r#"
[registry]
departments = ["SAUDE", "EDUCACAO"]
require_complete = false

[lifecycle]
revalidate_on_update = false

[logging]
level = "debug"
json = true
"#
    )
    .unwrap();

    let config: PlatformConfig = load_config(Some(file.path())).unwrap();

    assert_eq!(
        config.registry.departments,
        DepartmentSet::from_iter([Department::Saude, Department::Educacao])
    );
    assert!(!config.registry.require_complete);
    assert!(!config.lifecycle.revalidate_on_update);
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json);
    assert!(config.logging.console);
}

#[test]
fn explicit_file_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    assert!(load_config::<PlatformConfig>(Some(&missing)).is_err());
}

#[test]
fn unknown_department_codes_are_rejected() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[registry]\ndepartments = [\"SAUDE\", \"ASTRONOMIA\"]").unwrap();

    let err = load_config::<PlatformConfig>(Some(file.path())).unwrap_err();
    assert!(err.to_string().contains("ASTRONOMIA"), "{err}");
}
