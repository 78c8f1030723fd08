//! Health department (SAUDE): attendances, medical appointments, patient transport, the
//! patient registry and community health agents.

mod kinds;

pub use kinds::{
    COMMUNITY_HEALTH_AGENT, HEALTH_APPOINTMENT, HEALTH_ATTENDANCE, HEALTH_TRANSPORT_REQUEST,
    PATIENT,
};

use digiurban_kernel::prelude::*;
use std::sync::Arc;

pub static MANIFEST: DepartmentManifest = DepartmentManifest {
    department: Department::Saude,
    schemas: &[
        HEALTH_ATTENDANCE,
        HEALTH_APPOINTMENT,
        HEALTH_TRANSPORT_REQUEST,
        PATIENT,
        COMMUNITY_HEALTH_AGENT,
    ],
};

#[must_use]
pub fn manifest() -> &'static DepartmentManifest {
    &MANIFEST
}

/// Registers every health kind on `builder`.
///
/// # Errors
/// Propagates the first [`RegistryError`] raised while registering.
pub fn register(
    builder: RegistryBuilder,
    store: &Arc<dyn EntityStore>,
) -> Result<RegistryBuilder, RegistryError> {
    let builder = builder.register_manifest(&MANIFEST, store)?;
    tracing::info!("Health department registered");
    Ok(builder)
}
