use digiurban_kernel::prelude::*;
use digiurban_social_assistance::{VULNERABLE_FAMILY, register};
use serde_json::{Value, json};
use std::sync::Arc;

fn setup() -> (MemoryStore, Registry) {
    let store = MemoryStore::builder().citizen("c1", true).build().unwrap();
    let shared: Arc<dyn EntityStore> = Arc::new(store.clone());
    let registry = register(Registry::builder(), &shared)
        .unwrap()
        .build_complete(DepartmentSet::ASSISTENCIA_SOCIAL)
        .unwrap();
    (store, registry)
}

fn form(value: Value) -> FormData {
    value.as_object().cloned().unwrap()
}

#[tokio::test]
async fn family_size_feeds_member_count() {
    let (_, registry) = setup();
    let handler = registry.get(ModuleType::CadastroUnico).unwrap();

    let family = handler
        .create_entity("P-1", &form(json!({ "familySize": "4", "vulnerability": "HABITACIONAL" })), "c1")
        .await
        .unwrap();

    assert_eq!(family.field("memberCount"), Some(&json!(4)));
    assert_eq!(family.field("vulnerabilityType"), Some(&json!("HABITACIONAL")));
    assert_eq!(family.field("riskLevel"), Some(&json!("MEDIUM")));
    assert!(family.field("familySize").is_none());
}

#[tokio::test]
async fn member_count_defaults_to_one() {
    let (store, registry) = setup();
    let handler = registry.get(ModuleType::CadastroUnico).unwrap();

    let family = handler.create_entity("P-1", &FormData::new(), "c1").await.unwrap();

    assert_eq!(family.field("memberCount"), Some(&json!(1)));
    assert_eq!(family.field("hasCadUnico"), Some(&json!(false)));
    assert_eq!(store.count(VULNERABLE_FAMILY.kind), 1);
}

#[test]
fn registered_families_need_their_nis() {
    let (_, registry) = setup();
    let handler = registry.resolve("CADASTRO_UNICO").unwrap();

    let report = handler.validate_form_data(&form(json!({ "hasCadUnico": true })));
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].contains("cadUnicoNumber"));

    let report = handler
        .validate_form_data(&form(json!({ "hasCadUnico": "sim", "cadUnicoNumber": "123.45678.90-1" })));
    assert!(report.valid, "{:?}", report.errors);
}

#[tokio::test]
async fn benefit_review_is_an_optional_step() {
    let (_, registry) = setup();
    let handler = registry.get(ModuleType::SolicitacaoBeneficio).unwrap();
    let request = handler
        .create_entity("P-1", &form(json!({ "justification": "Desemprego" })), "c1")
        .await
        .unwrap();
    assert_eq!(request.field("reason"), Some(&json!("Desemprego")));
    assert_eq!(request.field("benefitType"), Some(&json!("CESTA_BASICA")));

    let err = handler.update_entity(&request.id, &form(json!({ "status": "APPROVED" }))).await.unwrap_err();
    assert!(matches!(err, LifecycleError::InvalidTransition { .. }));

    handler.update_entity(&request.id, &form(json!({ "status": "UNDER_REVIEW" }))).await.unwrap();
    handler.update_entity(&request.id, &form(json!({ "status": "REVIEWED" }))).await.unwrap();
    handler.activate_entity(&request.id).await.unwrap();
    assert_eq!(handler.find_by_protocol_id("P-1").await.unwrap().unwrap().status, "APPROVED");

    let unreviewed = handler
        .create_entity("P-2", &form(json!({ "reason": "Enchente" })), "c1")
        .await
        .unwrap();
    handler.activate_entity(&unreviewed.id).await.unwrap();
    assert_eq!(handler.find_by_protocol_id("P-2").await.unwrap().unwrap().status, "APPROVED");
}

#[tokio::test]
async fn home_visits_can_be_rescheduled_then_cancelled() {
    let (_, registry) = setup();
    let handler = registry.get(ModuleType::VisitasDomiciliares).unwrap();
    let visit = handler
        .create_entity("P-1", &form(json!({ "address": "Rua B, 7", "responsible": "Joana" })), "c1")
        .await
        .unwrap();
    assert_eq!(visit.field("socialWorker"), Some(&json!("Joana")));

    let moved = handler
        .update_entity(&visit.id, &form(json!({ "status": "RESCHEDULED", "visitDate": "2026-11-03" })))
        .await
        .unwrap();
    assert_eq!(moved.status, "RESCHEDULED");
    assert_eq!(moved.field("visitDate"), Some(&json!("2026-11-03")));

    handler.delete_entity(&visit.id).await.unwrap();
    let cancelled = handler.find_by_protocol_id("P-1").await.unwrap().unwrap();
    assert_eq!(cancelled.status, "CANCELLED");
    assert!(!cancelled.is_active);
}
