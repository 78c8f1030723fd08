//! Protocol-level entry point: raw module-type strings in, lifecycle calls out.

use crate::entity::{DepartmentEntity, FormData};
use crate::error::LifecycleError;
use crate::handler::LifecycleHandler;
use crate::registry::{Registry, RegistryError};
use digiurban_domain::ModuleType;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{debug, instrument};

#[digiurban_derive::digiurban_error]
pub enum DispatchError {
    #[error("{source}{}", format_context(.context))]
    Registry { source: RegistryError, context: Option<Cow<'static, str>> },

    #[error("{source}{}", format_context(.context))]
    Lifecycle { source: LifecycleError, context: Option<Cow<'static, str>> },
}

/// Result of [`ProtocolDispatcher::create_for_protocol`].
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    Created(Box<DepartmentEntity>),
    /// The module type produces no record; nothing was touched.
    Informational(ModuleType),
}

impl Dispatch {
    #[must_use]
    pub fn entity(&self) -> Option<&DepartmentEntity> {
        match self {
            Self::Created(entity) => Some(entity.as_ref()),
            Self::Informational(_) => None,
        }
    }
}

/// What the protocol orchestrator talks to.
#[derive(Debug, Clone)]
pub struct ProtocolDispatcher {
    registry: Registry,
}

impl ProtocolDispatcher {
    #[must_use]
    pub const fn new(registry: Registry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    #[must_use]
    pub fn has_handler(&self, module_type: &str) -> bool {
        self.registry.has_handler(module_type)
    }

    /// `None` for informational module types.
    fn handler_for(
        &self,
        module_type: &str,
    ) -> Result<Option<Arc<dyn LifecycleHandler>>, DispatchError> {
        let parsed = Registry::parse_module_type(module_type)?;
        if parsed.is_informational() {
            debug!(module_type = %parsed, "Informational module, nothing to dispatch");
            return Ok(None);
        }
        Ok(self.registry.resolve(module_type).map(Some)?)
    }

    /// Validates and creates the department entity of a new protocol.
    ///
    /// # Errors
    /// Unknown module types, then every [`LifecycleError`] of `create_entity`.
    #[instrument(skip(self, form_data))]
    pub async fn create_for_protocol(
        &self,
        module_type: &str,
        protocol_id: &str,
        form_data: &FormData,
        citizen_id: &str,
    ) -> Result<Dispatch, DispatchError> {
        let Some(handler) = self.handler_for(module_type)? else {
            return Ok(Dispatch::Informational(Registry::parse_module_type(module_type)?));
        };
        let entity = handler.create_entity(protocol_id, form_data, citizen_id).await?;
        Ok(Dispatch::Created(Box::new(entity)))
    }

    /// Activates the entity linked to `protocol_id`; a no-op for informational types.
    ///
    /// # Errors
    /// [`LifecycleError::NotFound`] when the protocol has no entity of this module type.
    #[instrument(skip(self))]
    pub async fn activate_by_protocol(
        &self,
        module_type: &str,
        protocol_id: &str,
    ) -> Result<(), DispatchError> {
        let Some(handler) = self.handler_for(module_type)? else {
            return Ok(());
        };
        let entity = Self::linked(handler.as_ref(), protocol_id).await?;
        Ok(handler.activate_entity(&entity.id).await?)
    }

    /// Soft-deletes the entity linked to `protocol_id`; a no-op for informational types.
    ///
    /// # Errors
    /// [`LifecycleError::NotFound`] when the protocol has no entity of this module type.
    #[instrument(skip(self))]
    pub async fn cancel_by_protocol(
        &self,
        module_type: &str,
        protocol_id: &str,
    ) -> Result<(), DispatchError> {
        let Some(handler) = self.handler_for(module_type)? else {
            return Ok(());
        };
        let entity = Self::linked(handler.as_ref(), protocol_id).await?;
        Ok(handler.delete_entity(&entity.id).await?)
    }

    async fn linked(
        handler: &dyn LifecycleHandler,
        protocol_id: &str,
    ) -> Result<DepartmentEntity, LifecycleError> {
        handler.find_by_protocol_id(protocol_id).await?.ok_or_else(|| LifecycleError::NotFound {
            message: format!("protocol '{protocol_id}' has no {}", handler.entity_name()).into(),
            context: None,
        })
    }
}
