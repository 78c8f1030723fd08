#![allow(dead_code)]

use async_trait::async_trait;
use digiurban_kernel::prelude::*;
use digiurban_store::{Precondition, Record, StoreError, UniqueGuard};
use serde_json::Value;
use std::sync::Arc;

pub static TRANSPORT: KindSchema = KindSchema {
    module_type: ModuleType::TransportePacientes,
    kind: "transport",
    entity_name: "TransportRequest",
    fields: &[
        FieldSpec::text("destination", "Destination"),
        FieldSpec::date("travelDate", "Travel date"),
        FieldSpec::boolean("companion", "Needs companion"),
        FieldSpec::text("companionName", "Companion name"),
        FieldSpec::integer("passengers", "Passengers")
            .aliases(&["numberOfPassengers"])
            .or(FieldDefault::Integer(1)),
    ],
    rules: &[
        Rule::Required("destination"),
        Rule::RequiredIf { field: "companionName", when: Condition::IsTrue("companion") },
        Rule::Range { field: "passengers", min: 1.0, max: 4.0 },
        Rule::Date("travelDate"),
    ],
    derived: &[],
    vocabulary: StatusVocabulary::simple("REQUESTED", "APPROVED")
        .with_intermediate(&["SCHEDULED", "CONFIRMED"]),
    uniqueness: Uniqueness::None,
};

pub static INCIDENT: KindSchema = KindSchema {
    module_type: ModuleType::RegistroOcorrenciaEscolar,
    kind: "incident",
    entity_name: "Incident",
    fields: &[FieldSpec::text("description", "Description")],
    rules: &[Rule::Required("description")],
    derived: &[],
    vocabulary: StatusVocabulary::simple("OPEN", "ACTIVE")
        .with_review("PENDING_REVIEW", "REVIEWED"),
    uniqueness: Uniqueness::None,
};

pub static PATIENT: KindSchema = KindSchema {
    module_type: ModuleType::CadastroPaciente,
    kind: "patient",
    entity_name: "Patient",
    fields: &[FieldSpec::text("cardNumber", "Health card")],
    rules: &[Rule::Required("cardNumber"), Rule::Digits { field: "cardNumber", count: 15 }],
    derived: &[],
    vocabulary: StatusVocabulary::simple("PENDING_APPROVAL", "ACTIVE"),
    uniqueness: Uniqueness::PerCitizen,
};

/// Store seeded with `c1`, `c3` (active) and `c2` (inactive).
pub fn store() -> MemoryStore {
    MemoryStore::builder()
        .citizen("c1", true)
        .citizen("c2", false)
        .citizen("c3", true)
        .build()
        .unwrap()
}

pub fn handler(schema: &'static KindSchema, store: &MemoryStore) -> SchemaHandler {
    SchemaHandler::new(schema, Arc::new(store.clone()), LifecycleOptions::default()).unwrap()
}

pub fn form(value: Value) -> FormData {
    value.as_object().cloned().unwrap()
}

/// Hands control back to the scheduler before every call, so handler operations driven
/// by `join!` interleave between their reads and writes.
#[derive(Debug, Clone)]
pub struct YieldingStore(pub MemoryStore);

#[async_trait]
impl EntityStore for YieldingStore {
    async fn find_by_id(&self, kind: &str, id: &str) -> Result<Option<Record>, StoreError> {
        tokio::task::yield_now().await;
        self.0.find_by_id(kind, id).await
    }

    async fn find_one_by_field(
        &self,
        kind: &str,
        field: &str,
        value: &Value,
    ) -> Result<Option<Record>, StoreError> {
        tokio::task::yield_now().await;
        self.0.find_one_by_field(kind, field, value).await
    }

    async fn find_by_field(
        &self,
        kind: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Record>, StoreError> {
        tokio::task::yield_now().await;
        self.0.find_by_field(kind, field, value).await
    }

    async fn insert(
        &self,
        kind: &str,
        record: Record,
        guards: &[UniqueGuard],
    ) -> Result<Record, StoreError> {
        tokio::task::yield_now().await;
        self.0.insert(kind, record, guards).await
    }

    async fn update(
        &self,
        kind: &str,
        id: &str,
        patch: Record,
        expected: Option<&Precondition>,
    ) -> Result<Record, StoreError> {
        tokio::task::yield_now().await;
        self.0.update(kind, id, patch, expected).await
    }
}

pub fn yielding_handler(schema: &'static KindSchema, store: &MemoryStore) -> SchemaHandler {
    let store = YieldingStore(store.clone());
    SchemaHandler::new(schema, Arc::new(store), LifecycleOptions::default()).unwrap()
}
