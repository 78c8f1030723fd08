//! Immutable module type → handler table.
//!
//! Built once at boot with [`RegistryBuilder`]; afterwards lookups are lock-free reads of a
//! shared map and always return the same `Arc` instance.

use crate::engine::{LifecycleOptions, SchemaHandler};
use crate::handler::LifecycleHandler;
use crate::schema::{DepartmentManifest, KindSchema};
use digiurban_domain::{Department, DepartmentSet, ModuleType};
use digiurban_store::EntityStore;
use fxhash::FxHashMap;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::ops::Deref;
use std::str::FromStr;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tracing::{debug, info};

#[digiurban_derive::digiurban_error]
pub enum RegistryError {
    #[error("Unknown module type{}: {message}", format_context(.context))]
    UnknownModuleType { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Duplicate registration{}: {message}", format_context(.context))]
    DuplicateRegistration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Informational module{}: {message}", format_context(.context))]
    InformationalModule { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Handler mismatch{}: {message}", format_context(.context))]
    HandlerMismatch { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid schema{}: {message}", format_context(.context))]
    InvalidSchema { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Missing handler{}: {message}", format_context(.context))]
    MissingHandler { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Registered handler counts, grouped by department.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegistryStats {
    pub total: usize,
    pub by_department: BTreeMap<Department, usize>,
}

/// The internal shared state of a [`Registry`].
#[derive(Debug, Default)]
pub struct RegistryInner {
    handlers: FxHashMap<ModuleType, Arc<dyn LifecycleHandler>>,
    /// Registered types in enum declaration order.
    order: Vec<ModuleType>,
}

impl RegistryInner {
    /// Typed lookup.
    #[must_use]
    pub fn get(&self, module_type: ModuleType) -> Option<Arc<dyn LifecycleHandler>> {
        self.handlers.get(&module_type).cloned()
    }

    #[must_use]
    pub fn contains(&self, module_type: ModuleType) -> bool {
        self.handlers.contains_key(&module_type)
    }

    /// Resolves a raw module-type string.
    ///
    /// # Errors
    /// [`RegistryError::UnknownModuleType`] when the string is not a module type or the type
    /// has no handler.
    pub fn resolve(&self, module_type: &str) -> Result<Arc<dyn LifecycleHandler>, RegistryError> {
        let parsed = Registry::parse_module_type(module_type)?;
        self.get(parsed).ok_or_else(|| RegistryError::UnknownModuleType {
            message: format!("no handler registered for '{parsed}'").into(),
            context: None,
        })
    }

    /// Whether `module_type` parses and has a handler.
    #[must_use]
    pub fn has_handler(&self, module_type: &str) -> bool {
        ModuleType::from_str(module_type.trim()).is_ok_and(|parsed| self.contains(parsed))
    }

    #[must_use]
    pub fn list_registered_types(&self) -> &[ModuleType] {
        &self.order
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> RegistryStats {
        let mut by_department = BTreeMap::new();
        for module_type in &self.order {
            *by_department.entry(module_type.department()).or_insert(0) += 1;
        }
        RegistryStats { total: self.order.len(), by_department }
    }
}

/// A thread-safe, reference-counted handler registry.
///
/// Cloning is cheap; clones share the same table.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    inner: Arc<RegistryInner>,
}

impl Deref for Registry {
    type Target = RegistryInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Registry {
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Parses a module-type code (`"CADASTRO_PACIENTE"`).
    ///
    /// # Errors
    /// [`RegistryError::UnknownModuleType`] for strings outside the catalogue.
    pub fn parse_module_type(raw: &str) -> Result<ModuleType, RegistryError> {
        ModuleType::from_str(raw.trim()).map_err(|_| RegistryError::UnknownModuleType {
            message: format!("'{raw}' is not a module type").into(),
            context: None,
        })
    }
}

/// Collects handlers, rejecting duplicates as they arrive.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    handlers: FxHashMap<ModuleType, Arc<dyn LifecycleHandler>>,
    options: LifecycleOptions,
}

impl RegistryBuilder {
    /// Options applied to handlers created by [`Self::register_schema`].
    #[must_use]
    pub fn options(mut self, options: LifecycleOptions) -> Self {
        self.options = options;
        self
    }

    /// Binds `handler` to `module_type`.
    ///
    /// # Errors
    /// * [`RegistryError::InformationalModule`] for module types without records.
    /// * [`RegistryError::HandlerMismatch`] when the handler serves another module type.
    /// * [`RegistryError::DuplicateRegistration`] when the type is already bound.
    pub fn register(
        mut self,
        module_type: ModuleType,
        handler: Arc<dyn LifecycleHandler>,
    ) -> Result<Self, RegistryError> {
        if module_type.is_informational() {
            return Err(RegistryError::InformationalModule {
                message: format!("'{module_type}' produces no records").into(),
                context: None,
            });
        }
        if handler.module_type() != module_type {
            return Err(RegistryError::HandlerMismatch {
                message: format!(
                    "{} serves '{}', not '{module_type}'",
                    handler.entity_name(),
                    handler.module_type()
                )
                .into(),
                context: None,
            });
        }
        if let Some(existing) = self.handlers.get(&module_type) {
            return Err(RegistryError::DuplicateRegistration {
                message: format!(
                    "'{module_type}' is already bound to {}",
                    existing.entity_name()
                )
                .into(),
                context: None,
            });
        }

        debug!(module_type = %module_type, entity = handler.entity_name(), "Handler registered");
        self.handlers.insert(module_type, handler);
        Ok(self)
    }

    /// Wraps `schema` in the generic engine and registers it.
    ///
    /// # Errors
    /// [`RegistryError::InvalidSchema`] when the schema fails its self-check, otherwise as
    /// [`Self::register`].
    pub fn register_schema(
        self,
        schema: &'static KindSchema,
        store: Arc<dyn EntityStore>,
    ) -> Result<Self, RegistryError> {
        if schema.module_type.is_informational() {
            return Err(RegistryError::InformationalModule {
                message: format!("'{}' produces no records", schema.module_type).into(),
                context: Some(schema.entity_name.into()),
            });
        }
        let handler = SchemaHandler::new(schema, store, self.options).map_err(|err| {
            RegistryError::InvalidSchema {
                message: err.to_string().into(),
                context: Some(schema.entity_name.into()),
            }
        })?;
        self.register(schema.module_type, Arc::new(handler))
    }

    /// Registers every schema of a department.
    ///
    /// # Errors
    /// [`RegistryError::InvalidSchema`] when a schema belongs to another department, otherwise
    /// as [`Self::register_schema`].
    pub fn register_manifest(
        mut self,
        manifest: &DepartmentManifest,
        store: &Arc<dyn EntityStore>,
    ) -> Result<Self, RegistryError> {
        for schema in manifest.schemas {
            if schema.module_type.department() != manifest.department {
                return Err(RegistryError::InvalidSchema {
                    message: format!(
                        "'{}' belongs to {}, not {}",
                        schema.module_type,
                        schema.module_type.department(),
                        manifest.department
                    )
                    .into(),
                    context: Some(schema.entity_name.into()),
                });
            }
            self = self.register_schema(schema, Arc::clone(store))?;
        }
        info!(
            department = %manifest.department,
            kinds = manifest.schemas.len(),
            "Department manifest registered"
        );
        Ok(self)
    }

    #[must_use]
    pub fn build(self) -> Registry {
        let mut order: Vec<_> = self.handlers.keys().copied().collect();
        order.sort_unstable();
        info!(handlers = order.len(), "Registry built");
        Registry { inner: Arc::new(RegistryInner { handlers: self.handlers, order }) }
    }

    /// Builds, requiring a handler for every record-producing type of `departments`.
    ///
    /// # Errors
    /// [`RegistryError::MissingHandler`] listing every unbound module type.
    pub fn build_complete(self, departments: DepartmentSet) -> Result<Registry, RegistryError> {
        let missing: Vec<String> = ModuleType::iter()
            .filter(|mt| !mt.is_informational() && departments.includes(mt.department()))
            .filter(|mt| !self.handlers.contains_key(mt))
            .map(|mt| mt.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(RegistryError::MissingHandler {
                message: missing.join(", ").into(),
                context: Some("Building registry".into()),
            });
        }
        Ok(self.build())
    }
}
