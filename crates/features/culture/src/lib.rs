//! Culture department (CULTURA): cultural space reservations and cultural projects.
//!
//! `AGENDA_EVENTOS_CULTURAIS` is informational and has no entity kind here.

mod kinds;

pub use kinds::{CULTURAL_PROJECT, CULTURAL_SPACE_RESERVATION};

use digiurban_kernel::prelude::*;
use std::sync::Arc;

pub static MANIFEST: DepartmentManifest = DepartmentManifest {
    department: Department::Cultura,
    schemas: &[CULTURAL_SPACE_RESERVATION, CULTURAL_PROJECT],
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
    tracing::info!("Culture department registered");
    Ok(builder)
}
