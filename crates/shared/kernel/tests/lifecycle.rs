mod common;

use common::{INCIDENT, PATIENT, TRANSPORT, form, handler, store, yielding_handler};
use digiurban_kernel::prelude::*;
use serde_json::json;
use std::sync::Arc;

fn trip() -> FormData {
    form(json!({ "destination": "Hospital Regional", "travelDate": "2026-04-02" }))
}

#[tokio::test]
async fn create_persists_inactive_entity_linked_to_protocol() {
    let store = store();
    let handler = handler(&TRANSPORT, &store);

    let entity = handler.create_entity("P-1", &trip(), "c1").await.unwrap();

    assert!(entity.id.starts_with("transport:"));
    assert_eq!(entity.module_type, ModuleType::TransportePacientes);
    assert_eq!(entity.status, "REQUESTED");
    assert!(!entity.is_active);
    assert_eq!(entity.field("passengers"), Some(&json!(1)));
    assert_eq!(entity.field("companion"), Some(&json!(false)));

    let found = handler.find_by_protocol_id("P-1").await.unwrap().unwrap();
    assert_eq!(found, entity);
    assert!(handler.find_by_protocol_id("P-2").await.unwrap().is_none());
}

#[tokio::test]
async fn invalid_forms_report_every_failure_and_persist_nothing() {
    let store = store();
    let handler = handler(&TRANSPORT, &store);
    let bad = form(json!({ "companion": true, "numberOfPassengers": 9, "travelDate": "soon" }));

    let err = handler.create_entity("P-1", &bad, "c1").await.unwrap_err();

    assert!(matches!(err, LifecycleError::ValidationFailed { .. }));
    assert_eq!(err.validation_errors().len(), 4);
    assert_eq!(store.count("transport"), 0);
}

#[tokio::test]
async fn citizen_must_exist_and_be_active() {
    let store = store();
    let handler = handler(&TRANSPORT, &store);

    let err = handler.create_entity("P-1", &trip(), "ghost").await.unwrap_err();
    assert!(matches!(err, LifecycleError::CitizenNotFound { .. }));

    let err = handler.create_entity("P-1", &trip(), "c2").await.unwrap_err();
    assert!(matches!(err, LifecycleError::CitizenInactive { .. }));
    assert_eq!(store.count("transport"), 0);
}

#[tokio::test]
async fn one_entity_per_protocol() {
    let store = store();
    let handler = handler(&TRANSPORT, &store);
    handler.create_entity("P-1", &trip(), "c1").await.unwrap();

    let err = handler.create_entity("P-1", &trip(), "c3").await.unwrap_err();
    assert!(matches!(err, LifecycleError::DuplicateRegistration { .. }));
    assert_eq!(store.count("transport"), 1);
}

#[tokio::test]
async fn person_bound_kinds_allow_one_live_record_per_citizen() {
    let store = store();
    let handler = handler(&PATIENT, &store);
    let card = form(json!({ "cardNumber": "123 4567 8901 2345" }));

    let first = handler.create_entity("P-1", &card, "c1").await.unwrap();
    let err = handler.create_entity("P-2", &card, "c1").await.unwrap_err();
    assert!(matches!(err, LifecycleError::DuplicateRegistration { .. }));

    handler.delete_entity(&first.id).await.unwrap();
    handler.create_entity("P-3", &card, "c1").await.unwrap();
    assert_eq!(store.count("patient"), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_person_bound_creates_admit_one() {
    let store = store();
    let handler = Arc::new(handler(&PATIENT, &store));

    let mut tasks = Vec::new();
    for n in 0..8 {
        let handler = Arc::clone(&handler);
        tasks.push(tokio::spawn(async move {
            let card = form(json!({ "cardNumber": "123456789012345" }));
            handler.create_entity(&format!("P-{n}"), &card, "c3").await
        }));
    }

    let mut created = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => created += 1,
            Err(err) => assert!(matches!(err, LifecycleError::DuplicateRegistration { .. })),
        }
    }
    assert_eq!(created, 1);
    assert_eq!(store.count("patient"), 1);
}

#[tokio::test]
async fn activation_is_idempotent_and_cancellation_is_terminal() {
    let store = store();
    let handler = handler(&TRANSPORT, &store);
    let created = handler.create_entity("P-1", &trip(), "c1").await.unwrap();

    handler.activate_entity(&created.id).await.unwrap();
    let active = handler.find_by_protocol_id("P-1").await.unwrap().unwrap();
    assert_eq!(active.status, "APPROVED");
    assert!(active.is_active);
    let first_activation = active.activated_at.unwrap();

    handler.activate_entity(&created.id).await.unwrap();
    let again = handler.find_by_protocol_id("P-1").await.unwrap().unwrap();
    assert_eq!(again.activated_at, Some(first_activation));

    handler.delete_entity(&created.id).await.unwrap();
    let cancelled = handler.find_by_protocol_id("P-1").await.unwrap().unwrap();
    assert_eq!(cancelled.status, "CANCELLED");
    assert!(!cancelled.is_active);
    assert!(cancelled.cancelled_at.is_some());

    handler.delete_entity(&created.id).await.unwrap();
    assert_eq!(store.count("transport"), 1);

    let err = handler.activate_entity(&created.id).await.unwrap_err();
    assert!(matches!(err, LifecycleError::InvalidTransition { .. }));
    let err = handler.update_entity(&created.id, &form(json!({ "destination": "UPA" }))).await.unwrap_err();
    assert!(matches!(err, LifecycleError::InvalidTransition { .. }));
}

#[tokio::test]
async fn intermediate_statuses_move_through_update() {
    let store = store();
    let handler = handler(&TRANSPORT, &store);
    let created = handler.create_entity("P-1", &trip(), "c1").await.unwrap();

    let scheduled = handler
        .update_entity(&created.id, &form(json!({ "status": "SCHEDULED", "numberOfPassengers": "2" })))
        .await
        .unwrap();
    assert_eq!(scheduled.status, "SCHEDULED");
    assert_eq!(scheduled.field("passengers"), Some(&json!(2)));
    assert!(scheduled.updated_at >= created.updated_at);

    for status in ["APPROVED", "CANCELLED", "REQUESTED", "LOST"] {
        let err = handler
            .update_entity(&created.id, &form(json!({ "status": status })))
            .await
            .unwrap_err();
        assert!(matches!(err, LifecycleError::InvalidTransition { .. }), "{status}");
    }

    handler.activate_entity(&created.id).await.unwrap();
    let err = handler
        .update_entity(&created.id, &form(json!({ "status": "CONFIRMED" })))
        .await
        .unwrap_err();
    assert!(matches!(err, LifecycleError::InvalidTransition { .. }));
}

#[tokio::test]
async fn lifecycle_fields_are_immutable() {
    let store = store();
    let handler = handler(&TRANSPORT, &store);
    let created = handler.create_entity("P-1", &trip(), "c1").await.unwrap();

    for key in ["protocolId", "citizenId", "id", "isActive", "createdAt"] {
        let err = handler
            .update_entity(&created.id, &form(json!({ key: "x" })))
            .await
            .unwrap_err();
        assert!(matches!(err, LifecycleError::ImmutableField { .. }), "{key}");
    }

    let unchanged = handler.find_by_protocol_id("P-1").await.unwrap().unwrap();
    assert_eq!(unchanged, created);
}

#[tokio::test]
async fn updates_are_revalidated_unless_disabled() {
    let store = store();
    let strict = handler(&TRANSPORT, &store);
    let created = strict.create_entity("P-1", &trip(), "c1").await.unwrap();

    let err = strict
        .update_entity(&created.id, &form(json!({ "companion": true })))
        .await
        .unwrap_err();
    assert!(matches!(err, LifecycleError::ValidationFailed { .. }));

    let lenient = SchemaHandler::new(
        &TRANSPORT,
        Arc::new(store.clone()),
        LifecycleOptions { revalidate_on_update: false },
    )
    .unwrap();
    let updated =
        lenient.update_entity(&created.id, &form(json!({ "companion": true }))).await.unwrap();
    assert_eq!(updated.field("companion"), Some(&json!(true)));
}

#[tokio::test]
async fn review_is_an_optional_step_before_activation() {
    let store = store();
    let handler = handler(&INCIDENT, &store);
    let direct = handler
        .create_entity("P-1", &form(json!({ "description": "Fight at recess" })), "c1")
        .await
        .unwrap();

    handler.activate_entity(&direct.id).await.unwrap();
    let active = handler.find_by_protocol_id("P-1").await.unwrap().unwrap();
    assert_eq!(active.status, "ACTIVE");
    assert!(active.is_active);

    let reviewed = handler
        .create_entity("P-2", &form(json!({ "description": "Broken window" })), "c1")
        .await
        .unwrap();
    let err = handler
        .update_entity(&reviewed.id, &form(json!({ "status": "REVIEWED" })))
        .await
        .unwrap_err();
    assert!(matches!(err, LifecycleError::InvalidTransition { .. }));

    for status in ["PENDING_REVIEW", "REVIEWED"] {
        handler.update_entity(&reviewed.id, &form(json!({ "status": status }))).await.unwrap();
    }
    handler.activate_entity(&reviewed.id).await.unwrap();
    assert!(handler.find_by_protocol_id("P-2").await.unwrap().unwrap().is_active);
}

#[tokio::test]
async fn integer_fields_keep_integral_decimal_input() {
    let store = store();
    let handler = handler(&TRANSPORT, &store);

    let trip = form(json!({ "destination": "UPA", "numberOfPassengers": "3,0" }));
    let created = handler.create_entity("P-1", &trip, "c1").await.unwrap();
    assert_eq!(created.field("passengers"), Some(&json!(3)));

    let updated = handler.update_entity(&created.id, &form(json!({ "passengers": 2.0 }))).await.unwrap();
    assert_eq!(updated.field("passengers"), Some(&json!(2)));

    let fractional = form(json!({ "destination": "UPA", "numberOfPassengers": 2.5 }));
    let err = handler.create_entity("P-2", &fractional, "c1").await.unwrap_err();
    assert_eq!(err.validation_errors(), ["Passengers (passengers) must be a whole number"]);
}

#[tokio::test]
async fn interleaved_creates_for_one_protocol_admit_one() {
    let store = store();
    let handler = yielding_handler(&TRANSPORT, &store);

    let (trip_a, trip_b) = (trip(), trip());
    let (a, b) =
        tokio::join!(handler.create_entity("P-1", &trip_a, "c1"), handler.create_entity("P-1", &trip_b, "c3"));

    assert_eq!(usize::from(a.is_ok()) + usize::from(b.is_ok()), 1);
    let err = a.err().or(b.err()).unwrap();
    assert!(matches!(err, LifecycleError::DuplicateRegistration { .. }));
    assert_eq!(store.count("transport"), 1);
}

#[tokio::test]
async fn interleaved_cancel_and_activate_end_cancelled() {
    let store = store();
    let handler = yielding_handler(&TRANSPORT, &store);
    let created = handler.create_entity("P-1", &trip(), "c1").await.unwrap();

    let (deleted, activated) =
        tokio::join!(handler.delete_entity(&created.id), handler.activate_entity(&created.id));

    deleted.unwrap();
    if let Err(err) = activated {
        assert!(matches!(err, LifecycleError::InvalidTransition { .. }));
    }
    let entity = handler.find_by_protocol_id("P-1").await.unwrap().unwrap();
    assert_eq!(entity.status, "CANCELLED");
    assert!(!entity.is_active);
    assert!(entity.cancelled_at.is_some());
}

#[tokio::test]
async fn interleaved_updates_apply_both_patches() {
    let store = store();
    let handler = yielding_handler(&TRANSPORT, &store);
    let created = handler.create_entity("P-1", &trip(), "c1").await.unwrap();

    let schedule_patch = form(json!({ "status": "SCHEDULED" }));
    let rename_patch = form(json!({ "destination": "UPA Norte" }));
    let (scheduled, renamed) = tokio::join!(
        handler.update_entity(&created.id, &schedule_patch),
        handler.update_entity(&created.id, &rename_patch),
    );
    scheduled.unwrap();
    renamed.unwrap();

    let entity = handler.find_by_protocol_id("P-1").await.unwrap().unwrap();
    assert_eq!(entity.status, "SCHEDULED");
    assert_eq!(entity.field("destination"), Some(&json!("UPA Norte")));
}

#[tokio::test]
async fn ids_of_other_kinds_never_resolve() {
    let store = store();
    let transport = handler(&TRANSPORT, &store);
    let patient = handler(&PATIENT, &store);
    let record = patient
        .create_entity("P-1", &form(json!({ "cardNumber": "123456789012345" })), "c1")
        .await
        .unwrap();

    for id in [record.id.as_str(), "transport:missing"] {
        let err = transport.activate_entity(id).await.unwrap_err();
        assert!(matches!(err, LifecycleError::NotFound { .. }), "{id}");
        let err = transport.delete_entity(id).await.unwrap_err();
        assert!(matches!(err, LifecycleError::NotFound { .. }), "{id}");
    }

    // Bare ids are resolved within the handler's own kind.
    let bare = record.id.trim_start_matches("patient:");
    patient.activate_entity(bare).await.unwrap();
}
