use digiurban_domain::{Department, DepartmentSet};
use serde_json::json;

#[test]
fn codes_are_screaming_snake() {
    assert_eq!(Department::AssistenciaSocial.code(), "ASSISTENCIA_SOCIAL");
    assert_eq!(Department::Saude.to_string(), "SAUDE");
    assert_eq!("HABITACAO".parse::<Department>().ok(), Some(Department::Habitacao));
    assert!("habitacao_x".parse::<Department>().is_err());
}

#[test]
fn set_from_str_handles_wildcard_and_unknown() {
    assert_eq!(DepartmentSet::from("*"), DepartmentSet::ALL);
    assert_eq!(DepartmentSet::from("all"), DepartmentSet::ALL);
    assert_eq!(DepartmentSet::from("CULTURA"), DepartmentSet::CULTURA);
    assert!(DepartmentSet::from("NOPE").is_empty());
}

#[test]
fn all_covers_every_department() {
    assert_eq!(DepartmentSet::ALL.departments().count(), 13);
    let collected: DepartmentSet = DepartmentSet::ALL.departments().collect();
    assert_eq!(collected, DepartmentSet::ALL);
}

#[test]
fn set_deserializes_from_single_code_or_list() {
    let one: DepartmentSet = serde_json::from_value(json!("ESPORTES")).unwrap();
    assert_eq!(one, DepartmentSet::ESPORTES);

    let many: DepartmentSet = serde_json::from_value(json!(["SAUDE", "TURISMO"])).unwrap();
    assert_eq!(many, DepartmentSet::SAUDE | DepartmentSet::TURISMO);

    let all: DepartmentSet = serde_json::from_value(json!("*")).unwrap();
    assert_eq!(all, DepartmentSet::ALL);
}

#[test]
fn set_rejects_unknown_codes() {
    let err = serde_json::from_value::<DepartmentSet>(json!(["SAUDE", "MARS"])).unwrap_err();
    assert!(err.to_string().contains("MARS"));
}

#[test]
fn set_serializes_to_codes() {
    let set = DepartmentSet::SAUDE | DepartmentSet::EDUCACAO;
    assert_eq!(serde_json::to_value(set).unwrap(), json!(["SAUDE", "EDUCACAO"]));
    assert_eq!(serde_json::to_value(DepartmentSet::ALL).unwrap(), json!("*"));
}
