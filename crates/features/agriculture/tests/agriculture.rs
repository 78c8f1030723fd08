use digiurban_agriculture::{RURAL_PRODUCER, register};
use digiurban_kernel::prelude::*;
use serde_json::{Value, json};
use std::sync::Arc;

fn setup() -> (MemoryStore, Registry) {
    let store = MemoryStore::builder().citizen("c1", true).citizen("c2", false).build().unwrap();
    let shared: Arc<dyn EntityStore> = Arc::new(store.clone());
    let registry = register(Registry::builder(), &shared)
        .unwrap()
        .build_complete(DepartmentSet::AGRICULTURA)
        .unwrap();
    (store, registry)
}

fn form(value: Value) -> FormData {
    value.as_object().cloned().unwrap()
}

fn producer() -> FormData {
    form(json!({
        "nome": "José da Silva",
        "cpf": "123.456.789-09",
        "telefone": "(88) 99999-1234",
        "tipoProdutor": "FAMILIAR",
        "principaisProducoes": "MILHO"
    }))
}

#[tokio::test]
async fn portuguese_keys_land_on_canonical_fields() {
    let (_, registry) = setup();
    let handler = registry.get(ModuleType::CadastroProdutor).unwrap();

    let entity = handler.create_entity("P-1", &producer(), "c1").await.unwrap();

    assert_eq!(entity.status, "PENDING");
    assert_eq!(entity.field("name"), Some(&json!("José da Silva")));
    assert_eq!(entity.field("document"), Some(&json!("123.456.789-09")));
    assert_eq!(entity.field("productionType"), Some(&json!("FAMILIAR")));
    assert_eq!(entity.field("mainCrop"), Some(&json!("MILHO")));
    assert!(entity.field("nome").is_none());
}

#[tokio::test]
async fn producer_registration_requires_an_active_citizen() {
    let (store, registry) = setup();
    let handler = registry.get(ModuleType::CadastroProdutor).unwrap();

    let err = handler.create_entity("P-1", &producer(), "c2").await.unwrap_err();
    assert!(matches!(err, LifecycleError::CitizenInactive { .. }));
    assert_eq!(store.count(RURAL_PRODUCER.kind), 0);
}

#[tokio::test]
async fn one_producer_record_per_citizen() {
    let (store, registry) = setup();
    let handler = registry.get(ModuleType::CadastroProdutor).unwrap();

    handler.create_entity("P-1", &producer(), "c1").await.unwrap();
    let err = handler.create_entity("P-2", &producer(), "c1").await.unwrap_err();

    assert!(matches!(err, LifecycleError::DuplicateRegistration { .. }));
    assert_eq!(store.count(RURAL_PRODUCER.kind), 1);
}

#[test]
fn producer_needs_name_and_cpf() {
    let (_, registry) = setup();
    let handler = registry.resolve("CADASTRO_PRODUTOR").unwrap();

    let report = handler.validate_form_data(&form(json!({ "cpf": "123" })));
    assert_eq!(
        report.errors,
        vec!["Producer name (name) must be informed", "CPF (document) must have exactly 11 digits"]
    );
}

#[tokio::test]
async fn attendance_goes_through_a_scheduled_visit() {
    let (_, registry) = setup();
    let handler = registry.get(ModuleType::AtendimentosAgricultura).unwrap();

    let entity = handler
        .create_entity(
            "P-1",
            &form(json!({ "descricao": "Praga no milharal", "tamanhoPropriedade": "12,5", "culturas": ["milho"] })),
            "c1",
        )
        .await
        .unwrap();
    assert_eq!(entity.field("propertySize"), Some(&json!(12.5)));
    assert_eq!(entity.field("crops"), Some(&json!(["milho"])));

    handler.update_entity(&entity.id, &form(json!({ "status": "SCHEDULED" }))).await.unwrap();
    handler.activate_entity(&entity.id).await.unwrap();
    handler.activate_entity(&entity.id).await.unwrap();
    assert_eq!(handler.find_by_protocol_id("P-1").await.unwrap().unwrap().status, "COMPLETED");
}

#[tokio::test]
async fn a_citizen_enrolls_in_several_courses() {
    let (store, registry) = setup();
    let handler = registry.resolve("INSCRICAO_CURSO_RURAL").unwrap();

    let first = handler
        .create_entity("P-1", &form(json!({ "cursoId": "curso-01", "cpf": "123.456.789-09" })), "c1")
        .await
        .unwrap();
    handler
        .create_entity("P-2", &form(json!({ "trainingId": "curso-02", "applicantCpf": "12345678909" })), "c1")
        .await
        .unwrap();

    assert_eq!(first.status, "PENDING");
    assert_eq!(first.field("trainingId"), Some(&json!("curso-01")));
    assert_eq!(first.field("documents"), Some(&json!([])));
    assert_eq!(store.count(digiurban_agriculture::RURAL_TRAINING_ENROLLMENT.kind), 2);

    let report = handler.validate_form_data(&form(json!({ "cpf": "123.456.789-09" })));
    assert_eq!(report.errors, vec!["Course (trainingId) must be informed"]);
}
