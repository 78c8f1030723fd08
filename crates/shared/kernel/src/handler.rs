use crate::entity::{DepartmentEntity, FormData};
use crate::error::LifecycleError;
use crate::validation::ValidationReport;
use async_trait::async_trait;
use digiurban_domain::{Department, ModuleType};
use std::fmt::Debug;

/// The lifecycle contract every department service implements.
///
/// Handlers are resolved by [`ModuleType`] from the [`Registry`](crate::registry::Registry)
/// and shared as `Arc<dyn LifecycleHandler>`.
#[async_trait]
pub trait LifecycleHandler: Send + Sync + Debug {
    fn module_type(&self) -> ModuleType;

    fn entity_name(&self) -> &'static str;

    fn department(&self) -> Department {
        self.module_type().department()
    }

    /// Validates, checks the citizen and uniqueness rules, then persists a new inactive entity
    /// linked to `protocol_id`.
    async fn create_entity(
        &self,
        protocol_id: &str,
        form_data: &FormData,
        citizen_id: &str,
    ) -> Result<DepartmentEntity, LifecycleError>;

    /// Moves the entity to the active status. Activating an active entity is a no-op.
    async fn activate_entity(&self, entity_id: &str) -> Result<(), LifecycleError>;

    async fn update_entity(
        &self,
        entity_id: &str,
        patch: &FormData,
    ) -> Result<DepartmentEntity, LifecycleError>;

    /// Soft delete: the record stays, inactive and cancelled.
    async fn delete_entity(&self, entity_id: &str) -> Result<(), LifecycleError>;

    async fn find_by_protocol_id(
        &self,
        protocol_id: &str,
    ) -> Result<Option<DepartmentEntity>, LifecycleError>;

    /// Pure check of a submitted form.
    fn validate_form_data(&self, form_data: &FormData) -> ValidationReport;
}
