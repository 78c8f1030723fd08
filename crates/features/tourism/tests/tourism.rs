use digiurban_kernel::prelude::*;
use digiurban_tourism::{TOURISM_GUIDE, register};
use serde_json::{Value, json};
use std::sync::Arc;

fn setup() -> (MemoryStore, Registry) {
    let store = MemoryStore::builder().citizen("c1", true).citizen("c2", true).build().unwrap();
    let shared: Arc<dyn EntityStore> = Arc::new(store.clone());
    let registry =
        register(Registry::builder(), &shared).unwrap().build_complete(DepartmentSet::TURISMO).unwrap();
    (store, registry)
}

fn form(value: Value) -> FormData {
    value.as_object().cloned().unwrap()
}

fn guide() -> FormData {
    form(json!({
        "fullName": "Carla Mendes",
        "cpf": "123.456.789-09",
        "languages": ["pt", "en"],
        "experienceYears": "7"
    }))
}

#[tokio::test]
async fn one_guide_registration_per_citizen() {
    let (store, registry) = setup();
    let handler = registry.get(ModuleType::CadastroGuiaTuristico).unwrap();

    let entity = handler.create_entity("P-1", &guide(), "c1").await.unwrap();
    assert_eq!(entity.field("name"), Some(&json!("Carla Mendes")));
    assert_eq!(entity.field("languages"), Some(&json!(["pt", "en"])));
    assert_eq!(entity.field("experienceYears"), Some(&json!(7)));

    let err = handler.create_entity("P-2", &guide(), "c1").await.unwrap_err();
    assert!(matches!(err, LifecycleError::DuplicateRegistration { .. }));

    handler.create_entity("P-3", &guide(), "c2").await.unwrap();
    assert_eq!(store.count(TOURISM_GUIDE.kind), 2);
}

#[tokio::test]
async fn a_cancelled_guide_can_register_again() {
    let (_, registry) = setup();
    let handler = registry.get(ModuleType::CadastroGuiaTuristico).unwrap();

    let first = handler.create_entity("P-1", &guide(), "c1").await.unwrap();
    handler.delete_entity(&first.id).await.unwrap();

    let again = handler.create_entity("P-2", &guide(), "c1").await.unwrap();
    assert_eq!(again.status, "PENDING");
}

#[test]
fn guides_need_a_cpf() {
    let (_, registry) = setup();
    let handler = registry.resolve("CADASTRO_GUIA_TURISTICO").unwrap();

    let report = handler.validate_form_data(&form(json!({ "name": "Carla", "email": "carla" })));
    assert_eq!(
        report.errors,
        vec!["CPF (cpf) must be informed", "E-mail (email) must be a valid e-mail address"]
    );
}

#[tokio::test]
async fn businesses_may_be_reviewed_before_listing() {
    let (_, registry) = setup();
    let handler = registry.get(ModuleType::CadastroEstabelecimentoTuristico).unwrap();

    let entity = handler
        .create_entity(
            "P-1",
            &form(json!({ "businessName": "Pousada do Lago", "address": "Estrada do Lago, km 3", "type": "lodging" })),
            "c1",
        )
        .await
        .unwrap();
    assert_eq!(entity.field("businessType"), Some(&json!("lodging")));
    assert_eq!(entity.field("isTourismPartner"), Some(&json!(false)));

    handler.update_entity(&entity.id, &form(json!({ "status": "UNDER_REVIEW" }))).await.unwrap();
    handler.update_entity(&entity.id, &form(json!({ "status": "APPROVED" }))).await.unwrap();
    handler.activate_entity(&entity.id).await.unwrap();

    let listed = handler.find_by_protocol_id("P-1").await.unwrap().unwrap();
    assert_eq!(listed.status, "ACTIVE");
    assert!(!registry.has_handler("MAPA_TURISTICO"));
}
