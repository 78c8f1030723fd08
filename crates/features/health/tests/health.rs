use digiurban_health::{HEALTH_TRANSPORT_REQUEST, PATIENT, manifest, register};
use digiurban_kernel::prelude::*;
use serde_json::{Value, json};
use std::sync::Arc;

fn registry() -> (MemoryStore, Registry) {
    let store = MemoryStore::builder().citizen("c1", true).citizen("c2", true).build().unwrap();
    let shared: Arc<dyn EntityStore> = Arc::new(store.clone());
    let registry = register(Registry::builder(), &shared)
        .unwrap()
        .build_complete(DepartmentSet::SAUDE)
        .unwrap();
    (store, registry)
}

fn form(value: Value) -> FormData {
    value.as_object().cloned().unwrap()
}

#[test]
fn manifest_covers_every_health_module() {
    let manifest = manifest();
    assert_eq!(manifest.department, Department::Saude);
    assert_eq!(manifest.schemas.len(), 5);
    for schema in manifest.schemas {
        schema.check().unwrap();
    }
}

#[tokio::test]
async fn transport_request_applies_defaults_and_moves_through_scheduling() {
    let (_, registry) = registry();
    let handler = registry.get(ModuleType::TransportePacientes).unwrap();
    assert_eq!(handler.entity_name(), HEALTH_TRANSPORT_REQUEST.entity_name);

    let entity = handler
        .create_entity("P-1", &form(json!({ "address": "Rua A, 10", "description": "Hemodiálise" })), "c1")
        .await
        .unwrap();
    assert_eq!(entity.status, "REQUESTED");
    assert_eq!(entity.field("origin"), Some(&json!("Rua A, 10")));
    assert_eq!(entity.field("reason"), Some(&json!("Hemodiálise")));
    assert_eq!(entity.field("destination"), Some(&json!("A definir")));
    assert_eq!(entity.field("transportType"), Some(&json!("AMBULANCIA")));
    assert_eq!(entity.field("needsCompanion"), Some(&json!(false)));

    for step in ["SCHEDULED", "CONFIRMED"] {
        let updated = handler.update_entity(&entity.id, &form(json!({ "status": step }))).await.unwrap();
        assert_eq!(updated.status, step);
    }
    handler.activate_entity(&entity.id).await.unwrap();
    let active = handler.find_by_protocol_id("P-1").await.unwrap().unwrap();
    assert_eq!(active.status, "APPROVED");
    assert!(active.is_active);
}

#[tokio::test]
async fn urgent_transport_needs_a_medical_justification() {
    let (_, registry) = registry();
    let handler = registry.get(ModuleType::TransportePacientes).unwrap();

    let report = handler.validate_form_data(&form(json!({ "urgencyLevel": "URGENTE" })));
    assert!(!report.valid);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].contains("medicalJustification"));

    let report = handler.validate_form_data(&form(json!({
        "urgencyLevel": "URGENTE",
        "observations": "Paciente oncológico"
    })));
    assert!(report.valid);
}

#[tokio::test]
async fn patient_registry_keeps_one_record_per_citizen() {
    let (store, registry) = registry();
    let handler = registry.get(ModuleType::CadastroPaciente).unwrap();
    let card = form(json!({ "susCardNumber": "700 0000 0000 0001", "bloodType": "o+" }));

    let patient = handler.create_entity("P-1", &card, "c1").await.unwrap();
    assert_eq!(patient.status, "PENDING_APPROVAL");
    assert_eq!(patient.field("bloodType"), Some(&json!("O+")));

    let err = handler.create_entity("P-2", &card, "c1").await.unwrap_err();
    assert!(matches!(err, LifecycleError::DuplicateRegistration { .. }));

    handler.create_entity("P-3", &card, "c2").await.unwrap();
    assert_eq!(store.count(PATIENT.kind), 2);
}

#[tokio::test]
async fn sus_card_must_carry_fifteen_digits() {
    let (_, registry) = registry();
    let handler = registry.get(ModuleType::CadastroPaciente).unwrap();

    let report = handler.validate_form_data(&form(json!({ "susCardNumber": "1234" })));
    assert_eq!(report.errors, vec!["SUS card number (susCardNumber) must have exactly 15 digits"]);
}

#[tokio::test]
async fn appointment_time_must_be_a_clock_time() {
    let (_, registry) = registry();
    let handler = registry.get(ModuleType::AgendamentosMedicos).unwrap();

    assert!(!handler.validate_form_data(&form(json!({ "appointmentTime": "25:00" }))).valid);

    let entity = handler
        .create_entity("P-1", &form(json!({ "specialty": "CARDIOLOGIA" })), "c1")
        .await
        .unwrap();
    assert_eq!(entity.field("appointmentTime"), Some(&json!("08:00")));
    assert_eq!(entity.field("speciality"), Some(&json!("CARDIOLOGIA")));
    assert!(entity.field("appointmentDate").and_then(Value::as_str).is_some());
}
