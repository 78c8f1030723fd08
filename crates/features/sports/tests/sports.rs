use digiurban_kernel::prelude::*;
use digiurban_sports::{MANIFEST, register};
use serde_json::{Value, json};
use std::sync::Arc;

fn registry() -> Registry {
    let store: Arc<dyn EntityStore> =
        Arc::new(MemoryStore::builder().citizen("c1", true).build().unwrap());
    register(Registry::builder(), &store).unwrap().build_complete(DepartmentSet::ESPORTES).unwrap()
}

fn form(value: Value) -> FormData {
    value.as_object().cloned().unwrap()
}

#[test]
fn registering_twice_is_rejected() {
    let store: Arc<dyn EntityStore> = Arc::new(MemoryStore::default());
    let builder = register(Registry::builder(), &store).unwrap();

    let err = builder.register_manifest(&MANIFEST, &store).unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateRegistration { .. }));
}

#[tokio::test]
async fn enrollment_accepts_school_id_alias() {
    let registry = registry();
    let handler = registry.get(ModuleType::InscricaoEscolinha).unwrap();

    let entity = handler
        .create_entity(
            "P-1",
            &form(json!({ "schoolId": "esc-futsal", "sport": "FUTSAL", "birthDate": "12/08/2015" })),
            "c1",
        )
        .await
        .unwrap();

    assert_eq!(entity.field("sportsSchoolId"), Some(&json!("esc-futsal")));
    assert_eq!(entity.field("studentBirthDate"), Some(&json!("2015-08-12")));
    assert_eq!(entity.field("shift"), Some(&json!("AFTERNOON")));
}

#[test]
fn enrollment_needs_a_sport() {
    let handler = registry().resolve("INSCRICAO_ESCOLINHA").unwrap();

    let report = handler.validate_form_data(&form(json!({ "studentBirthDate": "2015-02-30" })));
    assert_eq!(
        report.errors,
        vec!["Sport (sport) must be informed", "Student birth date (studentBirthDate) must be a valid date"]
    );
}

#[tokio::test]
async fn facility_reservation_defaults_and_fee_status() {
    let registry = registry();
    let handler = registry.get(ModuleType::ReservaEspacoEsportivo).unwrap();

    let entity = handler
        .create_entity("P-1", &form(json!({ "space": "Ginásio Central", "participants": 20 })), "c1")
        .await
        .unwrap();

    assert_eq!(entity.field("infrastructureName"), Some(&json!("Ginásio Central")));
    assert_eq!(entity.field("startTime"), Some(&json!("08:00")));
    assert_eq!(entity.field("endTime"), Some(&json!("10:00")));
    assert_eq!(entity.field("feeStatus"), Some(&json!("EXEMPT")));
    assert!(entity.field("date").and_then(Value::as_str).is_some());

    let err = handler
        .update_entity(&entity.id, &form(json!({ "feeStatus": "PAID" })))
        .await
        .unwrap_err();
    assert!(matches!(err, LifecycleError::ImmutableField { .. }));
}
