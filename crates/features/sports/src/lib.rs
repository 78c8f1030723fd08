//! Sports department (ESPORTES): sports school enrollments and sports facility reservations.
//!
//! `AGENDA_EVENTOS_ESPORTIVOS` is informational and has no entity kind here.

mod kinds;

pub use kinds::{SPORTS_INFRASTRUCTURE_RESERVATION, SPORTS_SCHOOL_ENROLLMENT};

use digiurban_kernel::prelude::*;
use std::sync::Arc;

pub static MANIFEST: DepartmentManifest = DepartmentManifest {
    department: Department::Esportes,
    schemas: &[SPORTS_SCHOOL_ENROLLMENT, SPORTS_INFRASTRUCTURE_RESERVATION],
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
    tracing::info!("Sports department registered");
    Ok(builder)
}
