//! Social assistance department (ASSISTENCIA_SOCIAL): the vulnerable family registry, social
//! appointments, benefit requests, emergency deliveries and home visits.

mod kinds;

pub use kinds::{
    BENEFIT_REQUEST, EMERGENCY_DELIVERY, HOME_VISIT, SOCIAL_APPOINTMENT, VULNERABLE_FAMILY,
};

use digiurban_kernel::prelude::*;
use std::sync::Arc;

pub static MANIFEST: DepartmentManifest = DepartmentManifest {
    department: Department::AssistenciaSocial,
    schemas: &[
        VULNERABLE_FAMILY,
        SOCIAL_APPOINTMENT,
        BENEFIT_REQUEST,
        EMERGENCY_DELIVERY,
        HOME_VISIT,
    ],
};

#[must_use]
pub fn manifest() -> &'static DepartmentManifest {
    &MANIFEST
}

/// # Errors
/// Propagates the first [`RegistryError`] raised while registering.
pub fn register(
    builder: RegistryBuilder,
    store: &Arc<dyn EntityStore>,
) -> Result<RegistryBuilder, RegistryError> {
    let builder = builder.register_manifest(&MANIFEST, store)?;
    tracing::info!("Social assistance department registered");
    Ok(builder)
}
