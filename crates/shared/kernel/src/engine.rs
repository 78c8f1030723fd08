//! Generic lifecycle engine driven by a [`KindSchema`].

use crate::entity::{DepartmentEntity, FormData};
use crate::error::{LifecycleError, LifecycleErrorExt};
use crate::handler::LifecycleHandler;
use crate::ids::{EntityRef, new_entity_id};
use crate::normalize::normalize;
use crate::schema::{KindSchema, SchemaError, Uniqueness};
use crate::status::LifecycleStage;
use crate::validation::{ValidationReport, Validator};
use async_trait::async_trait;
use chrono::Utc;
use digiurban_domain::ModuleType;
use digiurban_domain::config::LifecycleConfig;
use digiurban_domain::constants::{CITIZEN, CITIZEN_ID, IS_ACTIVE, PROTOCOL_ID, RESERVED_FIELDS, STATUS};
use digiurban_store::{EntityStore, Precondition, Record, StoreError, UniqueGuard};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Reads before a compare-and-set write gives up on a record that keeps changing.
const WRITE_ATTEMPTS: usize = 3;

/// Outcome of a conditional write.
enum Write {
    Done,
    /// Another writer changed the status since it was read.
    Stale,
}

/// Knobs of the engine that come from [`LifecycleConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleOptions {
    pub revalidate_on_update: bool,
}

impl Default for LifecycleOptions {
    fn default() -> Self {
        Self { revalidate_on_update: true }
    }
}

impl From<&LifecycleConfig> for LifecycleOptions {
    fn from(config: &LifecycleConfig) -> Self {
        Self { revalidate_on_update: config.revalidate_on_update }
    }
}

/// [`LifecycleHandler`] for any kind described by a [`KindSchema`].
#[derive(Debug)]
pub struct SchemaHandler {
    schema: &'static KindSchema,
    validator: Validator,
    store: Arc<dyn EntityStore>,
    options: LifecycleOptions,
}

impl SchemaHandler {
    /// # Errors
    /// [`SchemaError`] when the schema fails its self-check or a pattern does not compile.
    pub fn new(
        schema: &'static KindSchema,
        store: Arc<dyn EntityStore>,
        options: LifecycleOptions,
    ) -> Result<Self, SchemaError> {
        let validator = Validator::compile(schema)?;
        Ok(Self { schema, validator, store, options })
    }

    #[must_use]
    pub const fn schema(&self) -> &'static KindSchema {
        self.schema
    }

    fn describe(&self, action: &str) -> String {
        format!("{action} {}", self.schema.entity_name)
    }

    fn not_found(&self, entity_id: &str) -> LifecycleError {
        LifecycleError::NotFound {
            message: format!("no {} with id '{entity_id}'", self.schema.entity_name).into(),
            context: None,
        }
    }

    fn rejected(&self, entity: &DepartmentEntity, message: String) -> LifecycleError {
        warn!(entity_id = %entity.id, status = %entity.status, "{message}");
        LifecycleError::InvalidTransition {
            message: message.into(),
            context: Some(format!("{} '{}'", self.schema.entity_name, entity.id).into()),
        }
    }

    #[instrument(skip(self))]
    async fn ensure_citizen(&self, citizen_id: &str) -> Result<(), LifecycleError> {
        let citizen = self
            .store
            .find_by_id(CITIZEN, citizen_id)
            .await
            .context("Resolving citizen")?
            .ok_or_else(|| LifecycleError::CitizenNotFound {
                message: format!("citizen '{citizen_id}' does not exist").into(),
                context: None,
            })?;

        // Records without the flag predate activity tracking and count as active.
        if citizen.get(IS_ACTIVE) == Some(&Value::Bool(false)) {
            return Err(LifecycleError::CitizenInactive {
                message: format!("citizen '{citizen_id}' is inactive").into(),
                context: None,
            });
        }
        Ok(())
    }

    /// Rejects a second entity of this kind for a protocol, and a second live record per
    /// citizen for person-bound kinds. Returns the guards to insert with.
    async fn ensure_unique(
        &self,
        protocol_id: &str,
        citizen_id: &str,
    ) -> Result<Vec<UniqueGuard>, LifecycleError> {
        let (kind, name) = (self.schema.kind, self.schema.entity_name);

        if let Some(existing) = self
            .store
            .find_one_by_field(kind, PROTOCOL_ID, &Value::from(protocol_id))
            .await
            .context("Checking protocol")?
        {
            let id = existing.get("id").and_then(Value::as_str).unwrap_or_default();
            return Err(LifecycleError::DuplicateRegistration {
                message: format!("protocol '{protocol_id}' already has {name} '{id}'").into(),
                context: None,
            });
        }

        let mut guards = vec![UniqueGuard::new(PROTOCOL_ID, Value::from(protocol_id))];
        if self.schema.uniqueness == Uniqueness::PerCitizen {
            let cancelled = Value::from(self.schema.vocabulary.cancelled);
            let live = self
                .store
                .find_by_field(kind, CITIZEN_ID, &Value::from(citizen_id))
                .await
                .context("Checking citizen records")?
                .into_iter()
                .any(|record| record.get(STATUS) != Some(&cancelled));
            if live {
                return Err(LifecycleError::DuplicateRegistration {
                    message: format!("citizen '{citizen_id}' already has a {name}").into(),
                    context: None,
                });
            }
            guards.push(UniqueGuard::new(CITIZEN_ID, Value::from(citizen_id)).unless(STATUS, cancelled));
        }
        Ok(guards)
    }

    async fn load(&self, entity_id: &str) -> Result<DepartmentEntity, LifecycleError> {
        let kind = self.schema.kind;
        let id = EntityRef::verify(entity_id, kind).map_err(|_| self.not_found(entity_id))?;
        let record = self
            .store
            .find_by_id(kind, &id)
            .await
            .context("Loading entity")?
            .ok_or_else(|| self.not_found(entity_id))?;
        DepartmentEntity::from_record(record)
    }

    /// Writes the keys that differ between `before` and `after`, only while the stored
    /// status is still the one of `before`.
    async fn persist(
        &self,
        before: &DepartmentEntity,
        after: &DepartmentEntity,
        action: &str,
    ) -> Result<Write, LifecycleError> {
        let read = before.to_record()?;
        let patch: Record =
            after.to_record()?.into_iter().filter(|(key, value)| read.get(key) != Some(value)).collect();
        let expected = Precondition::new(STATUS, Value::from(before.status.as_str()));

        match self.store.update(self.schema.kind, &after.id, patch, Some(&expected)).await {
            Ok(_) => Ok(Write::Done),
            Err(StoreError::Conflict { .. }) => {
                debug!(entity_id = %after.id, status = %before.status, "Status changed under a pending write");
                Ok(Write::Stale)
            },
            Err(source) => Err(LifecycleError::Store { source, context: Some(self.describe(action).into()) }),
        }
    }

    fn contended(&self, entity_id: &str) -> LifecycleError {
        warn!(entity_id, attempts = WRITE_ATTEMPTS, "Gave up on a contended entity");
        LifecycleError::InvalidTransition {
            message: "entity kept changing concurrently".into(),
            context: Some(format!("{} '{entity_id}'", self.schema.entity_name).into()),
        }
    }

    #[instrument(skip(self, form_data), fields(kind = self.schema.kind))]
    async fn create(
        &self,
        protocol_id: &str,
        form_data: &FormData,
        citizen_id: &str,
    ) -> Result<DepartmentEntity, LifecycleError> {
        let mut report = self.validator.validate(form_data);
        for (name, value) in [(PROTOCOL_ID, protocol_id), (CITIZEN_ID, citizen_id)] {
            if value.trim().is_empty() {
                report.errors.push(format!("{name} must be informed"));
            }
        }
        if !report.errors.is_empty() {
            warn!(failures = report.errors.len(), "Rejected invalid form");
            return Err(LifecycleError::ValidationFailed {
                errors: report.errors,
                context: Some(self.describe("Creating").into()),
            });
        }

        self.ensure_citizen(citizen_id).await?;
        let guards = self.ensure_unique(protocol_id, citizen_id).await?;

        let now = Utc::now();
        let entity = DepartmentEntity {
            id: new_entity_id(self.schema.kind),
            module_type: self.schema.module_type,
            protocol_id: protocol_id.to_owned(),
            citizen_id: citizen_id.to_owned(),
            status: self.schema.vocabulary.initial.to_owned(),
            is_active: false,
            created_at: now,
            updated_at: now,
            activated_at: None,
            cancelled_at: None,
            fields: normalize(self.schema, form_data, now.date_naive()),
        };

        match self.store.insert(self.schema.kind, entity.to_record()?, &guards).await {
            Ok(_) => {},
            // Lost the race against a concurrent submission; report the winner.
            Err(StoreError::UniqueViolation { message, .. }) => {
                self.ensure_unique(protocol_id, citizen_id).await?;
                return Err(LifecycleError::DuplicateRegistration { message, context: None });
            },
            Err(source) => {
                return Err(LifecycleError::Store {
                    source,
                    context: Some(self.describe("Creating").into()),
                });
            },
        }

        info!(entity_id = %entity.id, status = %entity.status, "Entity created");
        Ok(entity)
    }

    #[instrument(skip(self), fields(kind = self.schema.kind))]
    async fn activate(&self, entity_id: &str) -> Result<(), LifecycleError> {
        let vocabulary = &self.schema.vocabulary;

        for _ in 0..WRITE_ATTEMPTS {
            let loaded = self.load(entity_id).await?;
            match vocabulary.stage(&loaded.status) {
                Some(LifecycleStage::Active) => {
                    debug!(entity_id = %loaded.id, "Already active");
                    return Ok(());
                },
                Some(stage) if vocabulary.can_activate(stage) => {},
                _ => {
                    let message = format!("cannot activate from status '{}'", loaded.status);
                    return Err(self.rejected(&loaded, message));
                },
            }

            let now = Utc::now();
            let mut entity = loaded.clone();
            entity.status = vocabulary.active.to_owned();
            entity.is_active = true;
            entity.activated_at = Some(now);
            entity.updated_at = now;
            if let Write::Done = self.persist(&loaded, &entity, "Activating").await? {
                info!(entity_id = %entity.id, from = %loaded.status, "Entity activated");
                return Ok(());
            }
        }
        Err(self.contended(entity_id))
    }

    #[instrument(skip(self, patch), fields(kind = self.schema.kind))]
    async fn update(
        &self,
        entity_id: &str,
        patch: &FormData,
    ) -> Result<DepartmentEntity, LifecycleError> {
        for _ in 0..WRITE_ATTEMPTS {
            let loaded = self.load(entity_id).await?;
            let mut entity = loaded.clone();
            self.apply_patch(&mut entity, patch)?;
            if let Write::Done = self.persist(&loaded, &entity, "Updating").await? {
                info!(entity_id = %entity.id, status = %entity.status, "Entity updated");
                return Ok(entity);
            }
        }
        Err(self.contended(entity_id))
    }

    /// Merges `patch` into a loaded entity, enforcing immutability, status moves and rules.
    fn apply_patch(&self, entity: &mut DepartmentEntity, patch: &FormData) -> Result<(), LifecycleError> {
        let vocabulary = &self.schema.vocabulary;
        let from = vocabulary.stage(&entity.status);

        if from.is_some_and(LifecycleStage::is_terminal) {
            return Err(self.rejected(entity, "cancelled entities cannot be updated".to_owned()));
        }

        let mut next_status = None;
        let mut merged = entity.fields.clone();
        for (key, value) in patch {
            if key == STATUS {
                let target = value.as_str().and_then(|s| vocabulary.stage(s).map(|stage| (s, stage)));
                match (from, target) {
                    (Some(from), Some((status, to))) if vocabulary.can_move(from, to) => {
                        next_status = Some(status.to_owned());
                    },
                    _ => {
                        let message = format!("status cannot change to {value}");
                        return Err(self.rejected(entity, message));
                    },
                }
            } else if RESERVED_FIELDS.contains(&key.as_str()) || self.schema.is_derived(key) {
                return Err(LifecycleError::ImmutableField {
                    message: format!("'{key}' cannot be changed").into(),
                    context: Some(format!("{} '{}'", self.schema.entity_name, entity.id).into()),
                });
            } else if let Some(spec) = self.schema.field_for_key(key) {
                merged.insert(spec.name.to_owned(), value.clone());
            } else {
                debug!(key = %key, "Ignoring undeclared field");
            }
        }

        if self.options.revalidate_on_update {
            let report = self.validator.validate(&merged);
            if !report.valid {
                warn!(entity_id = %entity.id, failures = report.errors.len(), "Rejected invalid update");
                return Err(LifecycleError::ValidationFailed {
                    errors: report.errors,
                    context: Some(self.describe("Updating").into()),
                });
            }
        }

        let now = Utc::now();
        entity.fields = normalize(self.schema, &merged, now.date_naive());
        if let Some(status) = next_status {
            entity.status = status;
        }
        entity.updated_at = now;
        Ok(())
    }

    #[instrument(skip(self), fields(kind = self.schema.kind))]
    async fn delete(&self, entity_id: &str) -> Result<(), LifecycleError> {
        let vocabulary = &self.schema.vocabulary;

        for _ in 0..WRITE_ATTEMPTS {
            let loaded = self.load(entity_id).await?;
            if vocabulary.stage(&loaded.status).is_some_and(LifecycleStage::is_terminal) {
                debug!(entity_id = %loaded.id, "Already cancelled");
                return Ok(());
            }

            let now = Utc::now();
            let mut entity = loaded.clone();
            entity.status = vocabulary.cancelled.to_owned();
            entity.is_active = false;
            entity.cancelled_at = Some(now);
            entity.updated_at = now;
            if let Write::Done = self.persist(&loaded, &entity, "Cancelling").await? {
                info!(entity_id = %entity.id, from = %loaded.status, "Entity cancelled");
                return Ok(());
            }
        }
        Err(self.contended(entity_id))
    }

    async fn by_protocol(&self, protocol_id: &str) -> Result<Option<DepartmentEntity>, LifecycleError> {
        self.store
            .find_one_by_field(self.schema.kind, PROTOCOL_ID, &Value::from(protocol_id))
            .await
            .context(self.describe("Finding"))?
            .map(DepartmentEntity::from_record)
            .transpose()
    }
}

#[async_trait]
impl LifecycleHandler for SchemaHandler {
    fn module_type(&self) -> ModuleType {
        self.schema.module_type
    }

    fn entity_name(&self) -> &'static str {
        self.schema.entity_name
    }

    async fn create_entity(
        &self,
        protocol_id: &str,
        form_data: &FormData,
        citizen_id: &str,
    ) -> Result<DepartmentEntity, LifecycleError> {
        self.create(protocol_id, form_data, citizen_id).await
    }

    async fn activate_entity(&self, entity_id: &str) -> Result<(), LifecycleError> {
        self.activate(entity_id).await
    }

    async fn update_entity(
        &self,
        entity_id: &str,
        patch: &FormData,
    ) -> Result<DepartmentEntity, LifecycleError> {
        self.update(entity_id, patch).await
    }

    async fn delete_entity(&self, entity_id: &str) -> Result<(), LifecycleError> {
        self.delete(entity_id).await
    }

    async fn find_by_protocol_id(
        &self,
        protocol_id: &str,
    ) -> Result<Option<DepartmentEntity>, LifecycleError> {
        self.by_protocol(protocol_id).await
    }

    fn validate_form_data(&self, form_data: &FormData) -> ValidationReport {
        self.validator.validate(form_data)
    }
}
